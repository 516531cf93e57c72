pub mod gui_app;
pub mod input_translator;
pub mod ports;

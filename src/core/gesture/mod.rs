pub mod input_event;
pub mod machine;
pub mod settings;
pub mod state;

pub use input_event::{InputEvent, TouchPoint};
pub use machine::{StateDelta, handle_input_event};
pub use settings::GestureSettings;
pub use state::GestureMode;

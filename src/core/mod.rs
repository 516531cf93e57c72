pub mod actions;
pub mod data;
pub mod gesture;
pub mod session;
pub mod view;

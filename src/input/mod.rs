//! Input adapters for the fern explorer.

#[cfg(feature = "gui")]
pub mod gui;

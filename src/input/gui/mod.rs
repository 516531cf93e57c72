//! GUI input adapter for interactive fern exploration.
//!
//! winit for the window and input, pixels for the framebuffer, egui for
//! the coefficient panel.

pub mod app;
pub mod commands;

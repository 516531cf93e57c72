//! Application layer for interactive fern exploration.
//!
//! [`FernExplorer`] owns the session and fractal configuration, feeds input
//! through the gesture machine, debounces coefficient edits and hands the
//! point cloud to whatever raster surface the host provides.

mod coefficient_editor;
pub mod data;
mod debounce;
mod explorer;
mod settings;

pub use coefficient_editor::EditorSettings;
pub use explorer::FernExplorer;
pub use settings::ExplorerSettings;

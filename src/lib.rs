mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::interactive::{EditorSettings, ExplorerSettings, FernExplorer};
pub use crate::core::actions::generate_point_cloud::generate_point_cloud::{generate_point_cloud, point_cloud_len};
pub use crate::core::actions::render_point_cloud::ports::raster_surface::RasterSurface;
pub use crate::core::actions::render_point_cloud::render_point_cloud::{RenderStyle, render_point_cloud};
pub use crate::core::data::affine_map::{AffineMap, CoefficientField, CoefficientFieldError};
pub use crate::core::data::canvas::{CanvasRect, CanvasRectError, CanvasSize};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::map_set::{MapId, MapIdError, MapSet};
pub use crate::core::data::point::{ScreenPoint, WorldPoint};
pub use crate::core::data::point_cloud::PointCloud;
pub use crate::core::gesture::{GestureMode, GestureSettings, InputEvent, StateDelta, TouchPoint};
pub use crate::core::session::InteractionRules;
pub use crate::core::view::{DetailLadder, DetailStep, ViewLimits, Viewport};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

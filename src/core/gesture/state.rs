use crate::core::data::point::ScreenPoint;
use std::time::Duration;

/// The active gesture. Exactly one is live at a time.
///
/// All positions are canvas-local.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    Panning {
        last: ScreenPoint,
    },
    PinchZooming {
        distance: f64,
        center: ScreenPoint,
    },
    /// Entered by a double tap. Zoom always centres on `origin`.
    ZoomDragging {
        origin: ScreenPoint,
        last: ScreenPoint,
        factor: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub mode: GestureMode,
    /// Time of the most recent single-finger touch start.
    pub last_tap: Option<Duration>,
}

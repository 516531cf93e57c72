//! Normalized input stream consumed by the gesture state machine.
//!
//! Coordinates are host-window pixels; the machine converts them to
//! canvas-local space with the canvas bounding rectangle.

use crate::core::data::point::ScreenPoint;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub client: ScreenPoint,
}

impl TouchPoint {
    #[must_use]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            client: ScreenPoint::new(x, y),
        }
    }
}

/// Touch lists always describe every finger still on the surface, in the
/// order the host reports them.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Wheel {
        delta_y: f64,
        client: ScreenPoint,
    },
    PointerDown {
        client: ScreenPoint,
    },
    PointerMove {
        client: ScreenPoint,
    },
    PointerUp {
        client: ScreenPoint,
    },
    TouchStart {
        touches: Vec<TouchPoint>,
        timestamp: Duration,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
    },
    TouchEnd {
        touches: Vec<TouchPoint>,
    },
}

use crate::core::data::point::ScreenPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for CanvasRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive and finite: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasRectError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// The canvas bounding rectangle in host-window coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasRect {
    left: f64,
    top: f64,
    size: CanvasSize,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, CanvasRectError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;

        if !valid(width) || !valid(height) || !left.is_finite() || !top.is_finite() {
            return Err(CanvasRectError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            top,
            size: CanvasSize { width, height },
        })
    }

    /// A canvas filling the whole window, as the explorer lays itself out.
    pub fn full_window(width: f64, height: f64) -> Result<Self, CanvasRectError> {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Converts host-window coordinates into canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: ScreenPoint) -> ScreenPoint {
        ScreenPoint {
            x: client.x - self.left,
            y: client.y - self.top,
        }
    }
}

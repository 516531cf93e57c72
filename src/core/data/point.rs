use std::ops::{Add, Sub};

/// A point in fractal space. Unitless, origin at the fern's base, +y is up.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// A point in canvas-local pixel space. Origin top-left, +y is down.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[must_use]
    pub fn midpoint(self, other: ScreenPoint) -> ScreenPoint {
        ScreenPoint {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;

    fn add(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;

    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

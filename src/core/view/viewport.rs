use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::{ScreenPoint, WorldPoint};
use crate::core::view::limits::ViewLimits;

/// World-to-screen mapping.
///
/// One world unit spans `scale` pixels. The offset is a screen-space shift
/// applied after centring on the canvas midpoint, with world +y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewLimits::default().default_scale)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_offset(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[inline]
    #[must_use]
    pub fn world_to_screen(&self, point: WorldPoint, canvas: CanvasSize) -> ScreenPoint {
        let center = canvas.center();

        ScreenPoint {
            x: center.x + point.x * self.scale + self.offset_x,
            y: center.y - point.y * self.scale + self.offset_y,
        }
    }

    #[must_use]
    pub fn screen_to_world(&self, point: ScreenPoint, canvas: CanvasSize) -> WorldPoint {
        let center = canvas.center();

        WorldPoint {
            x: (point.x - center.x - self.offset_x) / self.scale,
            y: (center.y - point.y + self.offset_y) / self.scale,
        }
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` at the same screen position.
    ///
    /// The new scale never drops below `limits.min_scale`. A factor that is
    /// not a positive finite number leaves the viewport untouched.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, factor: f64, canvas: CanvasSize, limits: &ViewLimits) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let world_anchor = self.screen_to_world(anchor, canvas);
        let new_scale = (self.scale * factor).max(limits.min_scale);
        let center = canvas.center();

        self.scale = new_scale;
        self.offset_x = anchor.x - center.x - world_anchor.x * new_scale;
        self.offset_y = anchor.y - center.y + world_anchor.y * new_scale;
    }

    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }
}

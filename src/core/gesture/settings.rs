use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Two single-finger starts closer than this begin a zoom-drag.
    pub double_tap_delay: Duration,
    /// Zoom factor change per pixel of vertical finger travel.
    pub zoom_drag_sensitivity: f64,
    pub zoom_drag_min_factor: f64,
    pub zoom_drag_max_factor: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            double_tap_delay: Duration::from_millis(300),
            zoom_drag_sensitivity: 0.01,
            zoom_drag_min_factor: 0.5,
            zoom_drag_max_factor: 2.0,
        }
    }
}

impl GestureSettings {
    /// Dragging up (negative `delta_y`) zooms in, dragging down zooms out.
    #[must_use]
    pub fn zoom_drag_factor(&self, delta_y: f64) -> f64 {
        (1.0 - delta_y * self.zoom_drag_sensitivity)
            .clamp(self.zoom_drag_min_factor, self.zoom_drag_max_factor)
    }
}

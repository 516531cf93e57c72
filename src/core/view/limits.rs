#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub default_scale: f64,
    pub min_scale: f64,
    pub wheel_zoom_factor: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            default_scale: 50.0,
            min_scale: 1e-6,
            wheel_zoom_factor: 1.1,
        }
    }
}

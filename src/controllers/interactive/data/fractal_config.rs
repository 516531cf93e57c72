use crate::core::data::map_set::MapSet;

/// Everything that shapes the attractor. A change here invalidates the point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractalConfig {
    pub map_set: MapSet,
}

impl FractalConfig {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

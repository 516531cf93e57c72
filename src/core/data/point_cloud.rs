use crate::core::data::point::WorldPoint;

/// Points sampled from the attractor, replaced wholesale on every regeneration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<WorldPoint>,
}

impl PointCloud {
    #[must_use]
    pub fn new(points: Vec<WorldPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

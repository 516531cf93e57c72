use crate::core::data::affine_map::AffineMap;
use crate::core::data::map_set::MapSet;

/// Cumulative-weight lookup for the chaos game.
///
/// Thresholds are running sums of the map weights in declaration order. No
/// renormalisation happens: any mass above the last threshold falls to the
/// last map, and weights summing past 1 starve the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionTable {
    entries: Vec<(f64, AffineMap)>,
}

impl SelectionTable {
    #[must_use]
    pub fn new(map_set: &MapSet) -> Self {
        let mut total = 0.0;
        let entries = map_set
            .maps()
            .iter()
            .map(|map| {
                total += map.p;
                (total, *map)
            })
            .collect();

        Self { entries }
    }

    #[cfg(test)]
    pub fn thresholds(&self) -> Vec<f64> {
        self.entries.iter().map(|(threshold, _)| *threshold).collect()
    }

    /// Index of the first map whose threshold exceeds `r`, else the last map.
    #[inline]
    #[must_use]
    pub fn select_index(&self, r: f64) -> usize {
        self.entries
            .iter()
            .position(|(threshold, _)| r < *threshold)
            .unwrap_or(self.entries.len().saturating_sub(1))
    }

    #[inline]
    #[must_use]
    pub fn select(&self, r: f64) -> &AffineMap {
        &self.entries[self.select_index(r)].1
    }
}

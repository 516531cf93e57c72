use crate::core::actions::generate_point_cloud::selection_table::SelectionTable;
use crate::core::data::map_set::MapSet;
use crate::core::data::point::WorldPoint;
use crate::core::data::point_cloud::PointCloud;
use rand::Rng;

/// Iterates with index up to and including this one are discarded.
pub const LAST_TRANSIENT_INDEX: usize = 20;

/// Number of points `generate_point_cloud` yields for `count` iterations.
#[must_use]
pub fn point_cloud_len(count: usize) -> usize {
    count.saturating_sub(LAST_TRANSIENT_INDEX + 1)
}

/// Samples the attractor of `map_set` with the chaos game.
///
/// Starts from the world origin and runs `count` iterations, each picking a
/// map by cumulative weight and applying it to the running point. The first
/// iterates are dropped so the seed point does not leave outliers behind.
pub fn generate_point_cloud<R: Rng>(map_set: &MapSet, count: usize, rng: &mut R) -> PointCloud {
    let table = SelectionTable::new(map_set);
    let mut points = Vec::with_capacity(point_cloud_len(count));
    let mut current = WorldPoint::default();

    for i in 0..count {
        let r: f64 = rng.random();
        current = table.select(r).apply(current);

        if i > LAST_TRANSIENT_INDEX {
            points.push(current);
        }
    }

    PointCloud::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::affine_map::CoefficientField;
    use crate::core::data::map_set::MapId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_output_length_excludes_transient() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = MapSet::default();

        for count in [0, 1, 20, 21, 22, 100, 10_000] {
            let cloud = generate_point_cloud(&set, count, &mut rng);
            assert_eq!(cloud.len(), count.saturating_sub(21), "count={}", count);
            assert_eq!(cloud.len(), point_cloud_len(count));
        }
    }

    #[test]
    fn test_default_fern_stays_within_known_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let cloud = generate_point_cloud(&MapSet::default(), 50_000, &mut rng);

        for point in cloud.points() {
            assert!(point.x > -2.5 && point.x < 3.0, "x out of range: {:?}", point);
            assert!(point.y >= 0.0 && point.y < 10.5, "y out of range: {:?}", point);
        }
    }

    #[test]
    fn test_weight_coverage_matches_weights() {
        let set = MapSet::default();
        let table = SelectionTable::new(&set);
        let mut rng = StdRng::seed_from_u64(1234);
        let draws = 1_000_000;
        let mut hits = [0usize; 4];

        for _ in 0..draws {
            hits[table.select_index(rng.random())] += 1;
        }

        let total = set.total_weight();
        for (i, (_, map)) in set.iter().enumerate() {
            let observed = hits[i] as f64 / draws as f64;
            let expected = map.p / total;
            assert!(
                (observed - expected).abs() < 0.01,
                "map {} observed {} expected {}",
                i,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_all_zero_weights_collapse_to_last_map_fixed_point() {
        let mut set = MapSet::default();
        for &id in MapId::ALL {
            set.set_coefficient(id, CoefficientField::P, 0.0);
        }
        let mut rng = StdRng::seed_from_u64(3);

        let cloud = generate_point_cloud(&set, 500, &mut rng);
        let last = *cloud.points().last().unwrap();
        let image = set.get(MapId::RightLeaflet).apply(last);

        assert!((image.x - last.x).abs() < 1e-6);
        assert!((image.y - last.y).abs() < 1e-6);
        for point in cloud.points() {
            assert!((point.x - last.x).abs() < 1e-6);
            assert!((point.y - last.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let set = MapSet::default();
        let a = generate_point_cloud(&set, 1_000, &mut StdRng::seed_from_u64(9));
        let b = generate_point_cloud(&set, 1_000, &mut StdRng::seed_from_u64(9));

        assert_eq!(a, b);
    }
}

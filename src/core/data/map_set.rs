use crate::core::data::affine_map::{AffineMap, CoefficientField};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapIdError {
    Unknown(String),
}

impl fmt::Display for MapIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown map: {:?}", name),
        }
    }
}

impl Error for MapIdError {}

/// Identifies one of the four fern transforms, in selection order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum MapId {
    Stem,
    #[default]
    MainLeaflets,
    LeftLeaflet,
    RightLeaflet,
}

impl MapId {
    pub const ALL: &'static [MapId] = &[
        MapId::Stem,
        MapId::MainLeaflets,
        MapId::LeftLeaflet,
        MapId::RightLeaflet,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Stem => 0,
            Self::MainLeaflets => 1,
            Self::LeftLeaflet => 2,
            Self::RightLeaflet => 3,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Stem => "f1",
            Self::MainLeaflets => "f2",
            Self::LeftLeaflet => "f3",
            Self::RightLeaflet => "f4",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Stem => "Stem (f1)",
            Self::MainLeaflets => "Main Leaflets (f2)",
            Self::LeftLeaflet => "Left Leaflet (f3)",
            Self::RightLeaflet => "Right Leaflet (f4)",
        }
    }
}

impl FromStr for MapId {
    type Err = MapIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "f1" | "stem" => Ok(Self::Stem),
            "f2" | "main_leaflets" => Ok(Self::MainLeaflets),
            "f3" | "left_leaflet" => Ok(Self::LeftLeaflet),
            "f4" | "right_leaflet" => Ok(Self::RightLeaflet),
            other => Err(MapIdError::Unknown(other.to_string())),
        }
    }
}

const BARNSLEY_FERN: [AffineMap; 4] = [
    AffineMap::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0, 0.01),
    AffineMap::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6, 0.85),
    AffineMap::new(0.2, -0.26, 0.23, 0.22, 0.0, 1.6, 0.07),
    AffineMap::new(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44, 0.07),
];

/// The ordered set of transforms that defines the fern.
///
/// Treated as a value: regeneration works from a copy, and edits replace a
/// single scalar of a single map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapSet {
    maps: [AffineMap; 4],
}

impl Default for MapSet {
    fn default() -> Self {
        Self::barnsley_fern()
    }
}

impl MapSet {
    #[must_use]
    pub fn barnsley_fern() -> Self {
        Self { maps: BARNSLEY_FERN }
    }

    #[must_use]
    pub fn from_maps(maps: [AffineMap; 4]) -> Self {
        Self { maps }
    }

    #[must_use]
    pub fn get(&self, id: MapId) -> &AffineMap {
        &self.maps[id.index()]
    }

    pub fn set_coefficient(&mut self, id: MapId, field: CoefficientField, value: f64) {
        self.maps[id.index()].set(field, value);
    }

    /// Maps in fixed selection order, f1 first.
    pub fn iter(&self) -> impl Iterator<Item = (MapId, &AffineMap)> {
        MapId::ALL.iter().copied().zip(self.maps.iter())
    }

    #[must_use]
    pub fn maps(&self) -> &[AffineMap] {
        &self.maps
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.maps.iter().map(|map| map.p).sum()
    }
}

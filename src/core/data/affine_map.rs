use crate::core::data::point::WorldPoint;
use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// One weighted affine transform `(x, y) -> (a*x + b*y + e, c*x + d*y + f)`.
///
/// `p` is the selection weight used by the chaos game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineMap {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub p: f64,
}

impl AffineMap {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, p: f64) -> Self {
        Self { a, b, c, d, e, f, p }
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, point: WorldPoint) -> WorldPoint {
        WorldPoint {
            x: self.a * point.x + self.b * point.y + self.e,
            y: self.c * point.x + self.d * point.y + self.f,
        }
    }

    #[must_use]
    pub fn get(&self, field: CoefficientField) -> f64 {
        match field {
            CoefficientField::A => self.a,
            CoefficientField::B => self.b,
            CoefficientField::C => self.c,
            CoefficientField::D => self.d,
            CoefficientField::E => self.e,
            CoefficientField::F => self.f,
            CoefficientField::P => self.p,
        }
    }

    pub fn set(&mut self, field: CoefficientField, value: f64) {
        let slot = match field {
            CoefficientField::A => &mut self.a,
            CoefficientField::B => &mut self.b,
            CoefficientField::C => &mut self.c,
            CoefficientField::D => &mut self.d,
            CoefficientField::E => &mut self.e,
            CoefficientField::F => &mut self.f,
            CoefficientField::P => &mut self.p,
        };
        *slot = value;
    }

    /// Human readable form of the transform, two decimals per coefficient.
    #[must_use]
    pub fn equation(&self) -> String {
        format!(
            "({:.2}x + {:.2}y + {:.2}, {:.2}x + {:.2}y + {:.2})",
            self.a, self.b, self.e, self.c, self.d, self.f
        )
    }

    #[must_use]
    pub fn probability_percent(&self) -> f64 {
        self.p * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoefficientFieldError {
    Unknown(String),
}

impl fmt::Display for CoefficientFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown coefficient field: {:?}", name),
        }
    }
}

impl Error for CoefficientFieldError {}

/// Names one scalar slot of an [`AffineMap`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CoefficientField {
    A,
    B,
    C,
    D,
    E,
    F,
    P,
}

impl CoefficientField {
    pub const ALL: &'static [CoefficientField] = &[
        CoefficientField::A,
        CoefficientField::B,
        CoefficientField::C,
        CoefficientField::D,
        CoefficientField::E,
        CoefficientField::F,
        CoefficientField::P,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::P => "p",
        }
    }

    /// Range offered by editor sliders. Programmatic edits are not clamped to it.
    #[must_use]
    pub fn slider_range(self) -> RangeInclusive<f64> {
        match self {
            Self::A | Self::B | Self::C | Self::D => -1.0..=1.0,
            Self::E | Self::F => -5.0..=5.0,
            Self::P => 0.0..=1.0,
        }
    }

    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::E | Self::F => 0.1,
            _ => 0.01,
        }
    }
}

impl FromStr for CoefficientField {
    type Err = CoefficientFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            "e" => Ok(Self::E),
            "f" => Ok(Self::F),
            "p" => Ok(Self::P),
            other => Err(CoefficientFieldError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for CoefficientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAFLETS: AffineMap = AffineMap::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6, 0.85);

    #[test]
    fn test_apply_is_affine() {
        let result = LEAFLETS.apply(WorldPoint { x: 1.0, y: 2.0 });

        assert!((result.x - (0.85 + 0.08)).abs() < 1e-12);
        assert!((result.y - (-0.04 + 1.7 + 1.6)).abs() < 1e-12);
    }

    #[test]
    fn test_apply_origin_yields_translation() {
        let result = LEAFLETS.apply(WorldPoint::default());

        assert_eq!(result, WorldPoint { x: 0.0, y: 1.6 });
    }

    #[test]
    fn test_set_replaces_only_one_field() {
        let mut map = LEAFLETS;
        map.set(CoefficientField::D, 0.5);

        assert_eq!(map.d, 0.5);
        assert_eq!(map.a, LEAFLETS.a);
        assert_eq!(map.b, LEAFLETS.b);
        assert_eq!(map.c, LEAFLETS.c);
        assert_eq!(map.e, LEAFLETS.e);
        assert_eq!(map.f, LEAFLETS.f);
        assert_eq!(map.p, LEAFLETS.p);
    }

    #[test]
    fn test_get_round_trips_every_field() {
        let mut map = LEAFLETS;

        for (i, &field) in CoefficientField::ALL.iter().enumerate() {
            map.set(field, i as f64);
            assert_eq!(map.get(field), i as f64);
        }
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("a".parse::<CoefficientField>(), Ok(CoefficientField::A));
        assert_eq!(" p ".parse::<CoefficientField>(), Ok(CoefficientField::P));
        assert_eq!(
            "z".parse::<CoefficientField>(),
            Err(CoefficientFieldError::Unknown("z".to_string()))
        );
    }

    #[test]
    fn test_slider_ranges_match_editor_layout() {
        assert_eq!(CoefficientField::A.slider_range(), -1.0..=1.0);
        assert_eq!(CoefficientField::E.slider_range(), -5.0..=5.0);
        assert_eq!(CoefficientField::P.slider_range(), 0.0..=1.0);
        assert_eq!(CoefficientField::F.step(), 0.1);
        assert_eq!(CoefficientField::C.step(), 0.01);
    }

    #[test]
    fn test_equation_formatting() {
        assert_eq!(LEAFLETS.equation(), "(0.85x + 0.04y + 0.00, -0.04x + 0.85y + 1.60)");
        assert!((LEAFLETS.probability_percent() - 85.0).abs() < 1e-9);
    }
}

//! Point score value object (0-20 scale).
//!
//! Each evaluation dimension is reported both as a percentage and as
//! points out of 20. The point value is always derived from the
//! percentage; it can never exceed its denominator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percentage;

/// A dimension score expressed as points out of 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointScore(u8);

impl PointScore {
    /// The maximum point value for a dimension.
    pub const MAX: u8 = 20;

    /// Derives the point score from a percentage: `round(pct / 100 * 20)`.
    pub fn from_percentage(percentage: Percentage) -> Self {
        let points = (f64::from(percentage.value()) / 100.0 * f64::from(Self::MAX)).round() as u8;
        debug_assert!(points <= Self::MAX);
        Self(points.min(Self::MAX))
    }

    /// Returns the point value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PointScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_score_is_rounded_rescale_of_percentage() {
        assert_eq!(PointScore::from_percentage(Percentage::new(0)).value(), 0);
        assert_eq!(PointScore::from_percentage(Percentage::new(50)).value(), 10);
        assert_eq!(PointScore::from_percentage(Percentage::new(73)).value(), 15);
        assert_eq!(
            PointScore::from_percentage(Percentage::new(100)).value(),
            20
        );
    }

    #[test]
    fn point_score_never_exceeds_max() {
        for pct in 0..=100u8 {
            let points = PointScore::from_percentage(Percentage::new(pct));
            assert!(points.value() <= PointScore::MAX);
        }
    }

    #[test]
    fn point_score_displays_with_denominator() {
        let points = PointScore::from_percentage(Percentage::new(85));
        assert_eq!(format!("{}", points), "17/20");
    }
}

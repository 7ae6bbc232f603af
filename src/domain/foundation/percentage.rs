//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage from an unclamped point total.
    ///
    /// Analyzer rules accumulate additive bonuses that can exceed 100
    /// before the final cap; this is the capping constructor for them.
    pub fn capped(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Creates a Percentage from a fractional score, rounding to nearest
    /// and clamping to [0, 100].
    pub fn from_f64(value: f64) -> Self {
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns the remaining distance to 100.
    pub fn gap(&self) -> u8 {
        100 - self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_capped_caps_point_totals() {
        assert_eq!(Percentage::capped(40).value(), 40);
        assert_eq!(Percentage::capped(145).value(), 100);
    }

    #[test]
    fn percentage_from_f64_rounds_and_clamps() {
        assert_eq!(Percentage::from_f64(16.5).value(), 17);
        assert_eq!(Percentage::from_f64(16.4).value(), 16);
        assert_eq!(Percentage::from_f64(-3.0).value(), 0);
        assert_eq!(Percentage::from_f64(130.0).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        let result = Percentage::try_new(101);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn percentage_gap_is_distance_to_100() {
        assert_eq!(Percentage::new(30).gap(), 70);
        assert_eq!(Percentage::HUNDRED.gap(), 0);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_serializes_to_json_number() {
        let pct = Percentage::new(42);
        let json = serde_json::to_string(&pct).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }
}

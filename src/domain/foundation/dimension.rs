//! The five public evaluation dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level scored aspect of a worksheet submission.
///
/// Ordering is the canonical report order; it also fixes iteration order
/// everywhere a deterministic sequence over dimensions is required.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ProblemClarity,
    MarketUnderstanding,
    CustomerEmpathy,
    ValueQuantification,
    SolutionDifferentiation,
}

impl Dimension {
    /// All five dimensions in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::ProblemClarity,
        Dimension::MarketUnderstanding,
        Dimension::CustomerEmpathy,
        Dimension::ValueQuantification,
        Dimension::SolutionDifferentiation,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::ProblemClarity => "Problem Clarity",
            Dimension::MarketUnderstanding => "Market Understanding",
            Dimension::CustomerEmpathy => "Customer Empathy",
            Dimension::ValueQuantification => "Value Quantification",
            Dimension::SolutionDifferentiation => "Solution Differentiation",
        }
    }

    /// Weight of this dimension in the overall score.
    ///
    /// Weights across the five dimensions always sum to 100.
    pub fn weight(&self) -> u8 {
        20
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

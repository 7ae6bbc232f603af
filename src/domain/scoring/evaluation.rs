//! Evaluation score value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, PointScore};

/// The reported score for one evaluation dimension.
///
/// The point value is derived from the percentage at construction and
/// can never exceed `max_score`; there is no other way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationScore {
    /// Points out of `max_score`.
    pub score: PointScore,
    /// Always 20.
    pub max_score: u8,
    /// The dimension percentage, 0-100.
    pub percentage: Percentage,
    /// Weight of this dimension in the overall score.
    pub weight: u8,
    /// Synthesized feedback text; never empty.
    pub feedback: String,
}

impl EvaluationScore {
    /// Builds an evaluation score from a dimension percentage.
    pub fn new(percentage: Percentage, weight: u8, feedback: String) -> Self {
        Self {
            score: PointScore::from_percentage(percentage),
            max_score: PointScore::MAX,
            percentage,
            weight,
            feedback,
        }
    }
}

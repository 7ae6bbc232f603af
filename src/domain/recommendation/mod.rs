//! Gap-driven recommendation generation.

mod generator;
mod plans;

pub use generator::{RecommendationGenerator, MAX_RECOMMENDATIONS, MIN_IMPROVEMENT};
pub use plans::{generic_playbook, playbook, Playbook, GTM_FOUNDATION};

use serde::{Deserialize, Serialize};

/// Priority band of a recommendation, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Strategic,
}

impl Priority {
    /// Multiplier applied to the raw improvement estimate.
    pub fn improvement_factor(&self) -> f64 {
        match self {
            Priority::Critical => 1.2,
            Priority::High => 1.0,
            Priority::Medium => 0.8,
            Priority::Strategic => 1.0,
        }
    }
}

/// A single prioritized improvement recommendation.
///
/// `dimension` is a display label rather than the [`crate::domain::foundation::Dimension`]
/// enum because the strategic recommendation targets the GTM foundation
/// as a whole, not any single scored dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub dimension: String,
    pub current_state: String,
    pub target_state: String,
    /// Realistic score improvement, always >= 3.
    pub expected_improvement: u8,
    pub action_plan: Vec<String>,
    pub success_metrics: Vec<String>,
}

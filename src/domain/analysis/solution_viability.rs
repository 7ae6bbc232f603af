//! Solution viability analyzer.
//!
//! The problem-statement worksheet carries no solution description, so
//! this analyzer returns fixed baselines. The contract still holds: it
//! never fails and every sub-score is in range. Real signal arrives once
//! the solution worksheet ships.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

const BASELINE_FEASIBILITY: u8 = 60;
const BASELINE_UNIQUENESS: u8 = 50;
const BASELINE_SCALABILITY: u8 = 50;

/// Sub-scores for solution viability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionViabilityAnalysis {
    pub feasibility: Percentage,
    pub uniqueness: Percentage,
    pub scalability: Percentage,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Baseline analyzer for solution viability.
pub struct SolutionViabilityAnalyzer;

impl SolutionViabilityAnalyzer {
    /// Returns the fixed baseline analysis.
    pub fn analyze() -> SolutionViabilityAnalysis {
        SolutionViabilityAnalysis {
            feasibility: Percentage::new(BASELINE_FEASIBILITY),
            uniqueness: Percentage::new(BASELINE_UNIQUENESS),
            scalability: Percentage::new(BASELINE_SCALABILITY),
            insights: Vec::new(),
            concerns: vec![
                "Solution viability uses baseline values until a solution worksheet is submitted"
                    .to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baselines_are_fixed_and_in_range() {
        let analysis = SolutionViabilityAnalyzer::analyze();
        assert_eq!(analysis.feasibility.value(), 60);
        assert_eq!(analysis.uniqueness.value(), 50);
        assert_eq!(analysis.scalability.value(), 50);
    }

    #[test]
    fn analyzer_is_deterministic() {
        assert_eq!(
            SolutionViabilityAnalyzer::analyze(),
            SolutionViabilityAnalyzer::analyze()
        );
    }
}

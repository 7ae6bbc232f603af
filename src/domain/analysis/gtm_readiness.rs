//! GTM readiness analyzer.
//!
//! Fixed baselines for the same reason as solution viability: the
//! problem-statement worksheet has no messaging/channel/pricing fields.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

const BASELINE_MESSAGING: u8 = 50;
const BASELINE_TARGETING: u8 = 60;
const BASELINE_CHANNELS: u8 = 40;
const BASELINE_PRICING: u8 = 40;

/// Sub-scores for go-to-market readiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmReadinessAnalysis {
    pub messaging: Percentage,
    pub targeting: Percentage,
    pub channels: Percentage,
    pub pricing: Percentage,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Baseline analyzer for go-to-market readiness.
pub struct GtmReadinessAnalyzer;

impl GtmReadinessAnalyzer {
    /// Returns the fixed baseline analysis.
    pub fn analyze() -> GtmReadinessAnalysis {
        GtmReadinessAnalysis {
            messaging: Percentage::new(BASELINE_MESSAGING),
            targeting: Percentage::new(BASELINE_TARGETING),
            channels: Percentage::new(BASELINE_CHANNELS),
            pricing: Percentage::new(BASELINE_PRICING),
            insights: Vec::new(),
            concerns: vec![
                "GTM readiness uses baseline values until the GTM worksheet is submitted"
                    .to_string(),
            ],
        }
    }
}

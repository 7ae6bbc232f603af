//! Dimensional analyzers.
//!
//! Six independent, pure analyzers over the enriched worksheet. Each
//! returns a small record of named sub-scores in [0, 100] built by
//! additive point rules: base value from presence/length checks, capped
//! bonuses from specific matches, aggregate capped at 100. None of them
//! can fail.

mod competitive_landscape;
mod customer_understanding;
mod gtm_readiness;
mod market_opportunity;
mod problem_definition;
mod solution_viability;

pub use competitive_landscape::{CompetitiveLandscapeAnalysis, CompetitiveLandscapeAnalyzer};
pub use customer_understanding::{CustomerUnderstandingAnalysis, CustomerUnderstandingAnalyzer};
pub use gtm_readiness::{GtmReadinessAnalysis, GtmReadinessAnalyzer};
pub use market_opportunity::{MarketOpportunityAnalysis, MarketOpportunityAnalyzer};
pub use problem_definition::{ProblemDefinitionAnalysis, ProblemDefinitionAnalyzer};
pub use solution_viability::{SolutionViabilityAnalysis, SolutionViabilityAnalyzer};

use serde::{Deserialize, Serialize};

use crate::domain::context::Context;
use crate::domain::enrichment::EnrichedWorksheet;
use crate::domain::worksheet::WorksheetInput;

/// The combined output of all six analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetAnalyses {
    pub problem_definition: ProblemDefinitionAnalysis,
    pub market_opportunity: MarketOpportunityAnalysis,
    pub customer_understanding: CustomerUnderstandingAnalysis,
    pub competitive_landscape: CompetitiveLandscapeAnalysis,
    pub solution_viability: SolutionViabilityAnalysis,
    pub gtm_readiness: GtmReadinessAnalysis,
}

impl WorksheetAnalyses {
    /// Runs all six analyzers.
    pub fn analyze(
        input: &WorksheetInput,
        enriched: &EnrichedWorksheet,
        context: &Context,
    ) -> Self {
        Self {
            problem_definition: ProblemDefinitionAnalyzer::analyze(input, enriched, context),
            market_opportunity: MarketOpportunityAnalyzer::analyze(input, enriched, context),
            customer_understanding: CustomerUnderstandingAnalyzer::analyze(input, enriched),
            competitive_landscape: CompetitiveLandscapeAnalyzer::analyze(input, enriched),
            solution_viability: SolutionViabilityAnalyzer::analyze(),
            gtm_readiness: GtmReadinessAnalyzer::analyze(),
        }
    }
}

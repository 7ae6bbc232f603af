//! Scoring aggregation.

mod aggregator;
mod evaluation;

pub use aggregator::{ScoreCard, ScoringAggregator, DIMENSION_SCORERS};
pub use evaluation::EvaluationScore;

//! Domain layer containing the worksheet analysis engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `worksheet` - Worksheet input schema and field normalization
//! - `enrichment` - Per-field text enrichment (metrics, entities, sentiment)
//! - `context` - Whole-submission classification (industry, stage, urgency)
//! - `analysis` - Six dimensional analyzers over enriched fields
//! - `scoring` - Aggregation into five weighted evaluation dimensions
//! - `feedback` - Deterministic per-dimension feedback synthesis
//! - `recommendation` - Gap-driven, bounded improvement recommendations
//! - `engine` - Pipeline orchestration producing an [`engine::AnalysisResult`]

pub mod analysis;
pub mod context;
pub mod engine;
pub mod enrichment;
pub mod feedback;
pub mod foundation;
pub mod recommendation;
pub mod scoring;
pub mod worksheet;

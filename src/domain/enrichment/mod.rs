//! Per-field text enrichment.
//!
//! [`enrich`] is a pure, total function: any string (including empty)
//! yields a fully-populated [`EnrichedField`]. All extraction is
//! rule-based pattern matching over fixed vocabularies and compiled
//! regexes; nothing here consults a clock, randomness, or I/O.

mod entities;
mod keywords;
mod metrics;
mod patterns;
mod sentiment;

pub use entities::{extract_companies, extract_roles, extract_technologies, extract_timeframes};
pub use keywords::{rank_keywords, Keyword};
pub use metrics::{distinct_currency_figures, extract_metrics, Metric, MetricKind};
pub use patterns::{detect_patterns, StructuralPatterns};
pub use sentiment::{analyze_sentiment, Sentiment, Tone};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::worksheet::{FieldKey, WorksheetInput};

/// Everything extracted from a single worksheet field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedField {
    /// Quantified mentions in discovery order.
    pub metrics: Vec<Metric>,
    /// Named roles, deduplicated and sorted.
    pub roles: BTreeSet<String>,
    /// Company names, deduplicated and sorted.
    pub companies: BTreeSet<String>,
    /// Technology mentions, deduplicated and sorted.
    pub technologies: BTreeSet<String>,
    /// Recurring or bounded time expressions in discovery order.
    pub timeframes: Vec<String>,
    /// Lexicon-based polarity summary.
    pub sentiment: Sentiment,
    /// Top keywords by frequency, at most ten.
    pub keywords: Vec<Keyword>,
    /// Boolean structural signals.
    pub patterns: StructuralPatterns,
}

/// Enriches one worksheet field. Pure and total.
pub fn enrich(text: &str) -> EnrichedField {
    EnrichedField {
        metrics: extract_metrics(text),
        roles: extract_roles(text),
        companies: extract_companies(text),
        technologies: extract_technologies(text),
        timeframes: extract_timeframes(text),
        sentiment: analyze_sentiment(text),
        keywords: rank_keywords(text),
        patterns: detect_patterns(text),
    }
}

/// Enrichment results for all six worksheet fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedWorksheet {
    fields: Vec<(FieldKey, EnrichedField)>,
}

impl EnrichedWorksheet {
    /// Enriches every field of a worksheet in canonical order.
    pub fn from_input(input: &WorksheetInput) -> Self {
        Self {
            fields: input
                .fields()
                .map(|(key, text)| (key, enrich(text)))
                .collect(),
        }
    }

    /// Returns the enrichment for a single field.
    pub fn field(&self, key: FieldKey) -> &EnrichedField {
        // FieldKey::ALL ordering matches construction order.
        &self
            .fields
            .iter()
            .find(|(k, _)| *k == key)
            .expect("all six fields are enriched at construction")
            .1
    }

    /// Iterates enrichments in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &EnrichedField)> {
        self.fields.iter().map(|(k, e)| (*k, e))
    }

    /// Total number of metrics extracted across all fields.
    pub fn total_metric_count(&self) -> usize {
        self.fields.iter().map(|(_, e)| e.metrics.len()).sum()
    }
}

//! Quantified-mention extraction.
//!
//! Four regex families run in a fixed order (percentage, currency,
//! duration, quantity); within a family, matches keep their text order.
//! The resulting list is therefore deterministic for a given input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kind of quantified mention a metric represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Percentage,
    Currency,
    Duration,
    Quantity,
}

/// A single quantified mention found in field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Which regex family matched.
    pub kind: MetricKind,
    /// The matched text, trimmed.
    pub value: String,
}

static PERCENTAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.?\d*\s*%").expect("valid percentage regex"));

// The magnitude suffix must sit directly on the number; a word boundary
// keeps a following word ("$400 budget") out of the match.
static CURRENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$[\d,]+(?:\.\d+)?[KMBT]?\b").expect("valid currency regex"));

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\s*(?:minutes?|hours?|days?|weeks?|months?|quarters?|years?)")
        .expect("valid duration regex")
});

static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d[\d,]*\+?\s*(?:customers?|users?|companies|employees|clients?|teams?|founders?|startups?|people)")
        .expect("valid quantity regex")
});

/// Extracts all quantified mentions from a field, tagged by kind.
pub fn extract_metrics(text: &str) -> Vec<Metric> {
    let mut metrics = Vec::new();
    let families: [(&Regex, MetricKind); 4] = [
        (&PERCENTAGE_RE, MetricKind::Percentage),
        (&CURRENCY_RE, MetricKind::Currency),
        (&DURATION_RE, MetricKind::Duration),
        (&QUANTITY_RE, MetricKind::Quantity),
    ];
    for (re, kind) in families {
        for m in re.find_iter(text) {
            metrics.push(Metric {
                kind,
                value: m.as_str().trim().to_string(),
            });
        }
    }
    metrics
}

/// Counts the distinct currency figures in a metric list.
pub fn distinct_currency_figures(metrics: &[Metric]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for metric in metrics {
        if metric.kind == MetricKind::Currency && !seen.contains(&metric.value.as_str()) {
            seen.push(&metric.value);
        }
    }
    seen.len()
}

//! Market opportunity analyzer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::context::{Context, Stage};
use crate::domain::enrichment::{distinct_currency_figures, EnrichedWorksheet, Metric, MetricKind};
use crate::domain::foundation::Percentage;
use crate::domain::worksheet::{FieldKey, WorksheetInput};

static QUALITATIVE_SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:large|huge|massive|enormous|big)\s+(?:market|opportunity|category|tam)\b")
        .expect("valid qualitative size regex")
});

const GROWTH_VERBS: &[&str] = &["growing", "expanding", "accelerating", "doubling", "surging"];

const STABILITY_VERBS: &[&str] = &["stable", "steady", "flat", "mature"];

const EASE_WORDS: &[&str] = &[
    "easy to reach",
    "accessible",
    "self-serve",
    "direct sales",
    "inbound",
    "existing channel",
];

const SOON_WORDS: &[&str] = &["soon", "this year", "this quarter", "next quarter"];

const EVENTUAL_WORDS: &[&str] = &["eventually", "someday", "long term", "down the road"];

const URGENT_TIMING_WORDS: &[&str] = &[
    "urgent", "immediately", "right now", "critical", "window is closing",
];

static CAGR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcagr\b|\d+\.?\d*\s*%\s*(?:cagr|growth|annual)").expect("valid cagr regex"));

/// Sub-scores for market opportunity, plus the raw quantification
/// signals downstream evidence rules consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOpportunityAnalysis {
    pub size: Percentage,
    pub growth: Percentage,
    pub accessibility: Percentage,
    pub timing: Percentage,
    pub quantification: Percentage,
    /// Metric count across the impact and problem fields.
    pub metric_count: u32,
    /// Distinct currency figures across the impact and problem fields.
    pub currency_figures: u32,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Analyzer for the size, growth, and timing of the opportunity.
pub struct MarketOpportunityAnalyzer;

impl MarketOpportunityAnalyzer {
    /// Scores the market opportunity. Pure and total.
    pub fn analyze(
        input: &WorksheetInput,
        enriched: &EnrichedWorksheet,
        context: &Context,
    ) -> MarketOpportunityAnalysis {
        let combined = input.combined_text();
        let mut insights = Vec::new();
        let mut concerns = Vec::new();

        let evidence_metrics: Vec<Metric> = enriched
            .field(FieldKey::WhatImpact)
            .metrics
            .iter()
            .chain(enriched.field(FieldKey::WhatProblem).metrics.iter())
            .cloned()
            .collect();
        let metric_count = evidence_metrics.len() as u32;
        let currency_figures = distinct_currency_figures(&evidence_metrics) as u32;

        // Size: largest currency magnitude wins; qualitative wording is
        // worth less than any explicit figure above $1M.
        let size = size_from_magnitude(&evidence_metrics, &combined);
        if size >= 90 {
            insights.push("Market size is framed in billions".to_string());
        } else if size == 30 {
            concerns.push("No market size signal found".to_string());
        }

        // Growth: explicit rate > growth verbs > stability verbs > default.
        let growth = if CAGR_RE.is_match(&combined) {
            80
        } else if GROWTH_VERBS.iter().any(|w| combined.contains(w)) {
            60
        } else if STABILITY_VERBS.iter().any(|w| combined.contains(w)) {
            40
        } else {
            30
        };

        // Accessibility: base 50, ease wording +30, early-PMF stage +20.
        let mut accessibility = 50u32;
        if EASE_WORDS.iter().any(|w| combined.contains(w)) {
            accessibility += 30;
        }
        if context.stage == Some(Stage::EarlyProductMarketFit) {
            accessibility += 20;
        }

        // Timing: keyword tiers with a neutral default.
        let timing = if URGENT_TIMING_WORDS.iter().any(|w| combined.contains(w)) {
            90
        } else if SOON_WORDS.iter().any(|w| combined.contains(w)) {
            70
        } else if EVENTUAL_WORDS.iter().any(|w| combined.contains(w)) {
            40
        } else {
            50
        };

        // Quantification: tiered on metric density, bonus for multiple
        // distinct dollar figures.
        let mut quantification = match metric_count {
            0 => 10,
            1..=2 => 40,
            3..=4 => 70,
            _ => 95,
        };
        if currency_figures >= 2 {
            quantification += 15;
        }

        MarketOpportunityAnalysis {
            size: Percentage::capped(size),
            growth: Percentage::capped(growth),
            accessibility: Percentage::capped(accessibility),
            timing: Percentage::capped(timing),
            quantification: Percentage::capped(quantification),
            metric_count,
            currency_figures,
            insights,
            concerns,
        }
    }
}

/// Buckets market size by the largest currency magnitude suffix seen.
fn size_from_magnitude(metrics: &[Metric], combined: &str) -> u32 {
    let mut best = 0u32;
    for metric in metrics {
        if metric.kind != MetricKind::Currency {
            continue;
        }
        let suffix = metric
            .value
            .chars()
            .last()
            .map(|c| c.to_ascii_uppercase());
        let bucket = match suffix {
            Some('T') | Some('B') => 90,
            Some('M') => 70,
            Some('K') => 50,
            _ => 0,
        };
        best = best.max(bucket);
    }
    if combined.contains("trillion") || combined.contains("billion") {
        best = best.max(90);
    }
    if best == 0 && QUALITATIVE_SIZE_RE.is_match(combined) {
        best = 60;
    }
    if best == 0 {
        best = 30;
    }
    best
}

//! Customer understanding analyzer.
//!
//! The validation rule is the heart of this analyzer: an explicit
//! interview/customer count in the evidence field is worth far more than
//! generic "we talked to people" language, and pilot programs with
//! measured outcomes stack on top.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::enrichment::{EnrichedWorksheet, MetricKind};
use crate::domain::foundation::Percentage;
use crate::domain::worksheet::{FieldKey, WorksheetInput};

static VALIDATION_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*(?:interviews?|customers?|founders?|compan(?:y|ies)|startups?)")
        .expect("valid validation count regex")
});

static SURVEY_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\d+\s*surveys?|surveyed\s*\d+)").expect("valid survey regex")
});

static PILOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:pilot|beta)\b").expect("valid pilot regex"));

static OUTCOME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+x\b|\bfaster\b|\bimprovement\b|\breduced\b|\bincreased?\b")
        .expect("valid outcome regex")
});

const GENERIC_VALIDATION_WORDS: &[&str] = &[
    "interview", "survey", "spoke with", "talked to", "feedback", "conversations",
];

const SEGMENT_WORDS: &[&str] = &["smb", "mid-market", "enterprise", "segment", "vertical"];

static INTENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:trying to|need to|want to|have to)\b").expect("valid intent regex")
});

static IMPACT_OUTCOME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:so they can|achieve|outcome|improve|save|unlock)\b")
        .expect("valid impact outcome regex")
});

/// Length tiers for depth (character count of the who field).
const DEPTH_LENGTH_TIERS: [(usize, u32); 4] = [(150, 70), (80, 50), (30, 30), (0, 10)];

/// Validation score tiers by reported count, highest first.
const VALIDATION_COUNT_TIERS: [(u32, u32); 5] =
    [(150, 95), (100, 85), (50, 75), (25, 60), (10, 45)];

/// Sub-scores for customer understanding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUnderstandingAnalysis {
    pub depth: Percentage,
    pub segmentation: Percentage,
    pub validation: Percentage,
    pub jobs_to_be_done: Percentage,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Analyzer for how well the customer is known and validated.
pub struct CustomerUnderstandingAnalyzer;

impl CustomerUnderstandingAnalyzer {
    /// Scores customer understanding. Pure and total.
    pub fn analyze(
        input: &WorksheetInput,
        enriched: &EnrichedWorksheet,
    ) -> CustomerUnderstandingAnalysis {
        let who = input.field(FieldKey::WhoAffected);
        let who_enriched = enriched.field(FieldKey::WhoAffected);
        let evidence = input.field(FieldKey::EvidenceValidation);
        let mut insights = Vec::new();
        let mut concerns = Vec::new();

        // Depth: who length tiers + headcount mention + role variety.
        let mut depth = DEPTH_LENGTH_TIERS
            .iter()
            .find(|(min_len, _)| who.len() >= *min_len)
            .map(|(_, points)| *points)
            .unwrap_or(10);
        if who_enriched
            .metrics
            .iter()
            .any(|m| m.kind == MetricKind::Quantity)
        {
            depth += 20;
        }
        if who_enriched.roles.len() >= 3 {
            depth += 10;
        }

        // Segmentation: role variety tiers + segment wording.
        let role_count = who_enriched.roles.len();
        let mut segmentation = match role_count {
            0 => 20,
            1 => 40,
            2 => 60,
            _ => 80,
        };
        let who_lower = who.to_lowercase();
        if SEGMENT_WORDS.iter().any(|w| who_lower.contains(w)) {
            segmentation += 20;
        }

        // Validation: explicit count tier, generic fallback, bonuses.
        let validation = Self::validation_score(evidence, &mut insights, &mut concerns);

        // Jobs-to-be-done: intent verbs in the problem, outcomes in the impact.
        let mut jobs_to_be_done = if INTENT_RE.is_match(input.field(FieldKey::WhatProblem)) {
            60
        } else {
            30
        };
        if IMPACT_OUTCOME_RE.is_match(input.field(FieldKey::WhatImpact)) {
            jobs_to_be_done += 30;
        }

        CustomerUnderstandingAnalysis {
            depth: Percentage::capped(depth),
            segmentation: Percentage::capped(segmentation),
            validation: Percentage::capped(validation),
            jobs_to_be_done: Percentage::capped(jobs_to_be_done),
            insights,
            concerns,
        }
    }

    fn validation_score(
        evidence: &str,
        insights: &mut Vec<String>,
        concerns: &mut Vec<String>,
    ) -> u32 {
        let mut best_count: Option<u32> = None;
        for caps in VALIDATION_COUNT_RE.captures_iter(evidence) {
            if let Ok(count) = caps[1].parse::<u32>() {
                best_count = Some(best_count.map_or(count, |c| c.max(count)));
            }
        }

        let mut score = match best_count {
            Some(count) => {
                let tier = VALIDATION_COUNT_TIERS
                    .iter()
                    .find(|(min, _)| count >= *min)
                    .map(|(_, points)| *points)
                    .unwrap_or(25);
                if count >= 100 {
                    insights.push(format!(
                        "Validation at scale: {} customer conversations reported",
                        count
                    ));
                }
                tier
            }
            None => {
                let lower = evidence.to_lowercase();
                if GENERIC_VALIDATION_WORDS.iter().any(|w| lower.contains(w)) {
                    concerns
                        .push("Validation is described without a concrete count".to_string());
                    30
                } else {
                    concerns.push("No customer validation reported".to_string());
                    10
                }
            }
        };

        if SURVEY_COUNT_RE.is_match(evidence) {
            score += 10;
        }
        if PILOT_RE.is_match(evidence) && OUTCOME_RE.is_match(evidence) {
            score += 20;
            insights.push("Pilot program reports a measured outcome".to_string());
        }
        score
    }
}

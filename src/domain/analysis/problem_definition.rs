//! Problem definition analyzer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::context::{Context, Industry};
use crate::domain::enrichment::EnrichedWorksheet;
use crate::domain::foundation::Percentage;
use crate::domain::worksheet::{FieldKey, WorksheetInput};

/// Words that name the problem rather than describe a situation.
const PROBLEM_LANGUAGE: &[&str] = &[
    "problem", "pain", "struggle", "challenge", "issue", "bottleneck", "friction",
];

/// Words that signal a precise, deliberate description.
const PRECISION_WORDS: &[&str] = &["precisely", "specifically", "exactly", "in particular"];

/// Conjunctions that anchor the problem to a situation.
const SITUATIONAL_CONJUNCTIONS: &[&str] = &[
    "when", "while", "during", "whenever", "after", "before",
];

/// Named customer segment types.
const SEGMENT_TYPES: &[&str] = &[
    "smb", "mid-market", "enterprise", "startup", "startups", "small business", "segment",
];

const URGENCY_WORDS: &[&str] = &[
    "urgent", "immediately", "critical", "asap", "pressing", "right now",
];

const LOSS_RISK_WORDS: &[&str] = &[
    "losing", "lose", "lost", "risk", "bleeding", "miss", "missed", "penalty",
];

static SOLUTION_EXISTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:could be solved|solvable|automat(?:e|ed|ion)|tools? exist|workaround|fixable)\b")
        .expect("valid solvability regex")
});

const MARKET_WORDS: &[&str] = &["market", "industry", "sector", "demand", "category"];

const B2B_FIT_WORDS: &[&str] = &[
    "churn", "retention", "pipeline", "renewal", "onboarding", "arr", "mrr", "seats",
];

/// Length tiers for clarity (character count of the problem field).
const CLARITY_LENGTH_TIERS: [(usize, u32); 4] = [(300, 40), (150, 30), (50, 20), (0, 10)];

/// Sub-scores for problem definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinitionAnalysis {
    pub clarity: Percentage,
    pub specificity: Percentage,
    pub urgency: Percentage,
    pub solvability: Percentage,
    pub market_relevance: Percentage,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Analyzer for how well the problem itself is articulated.
pub struct ProblemDefinitionAnalyzer;

impl ProblemDefinitionAnalyzer {
    /// Scores the problem definition. Pure and total.
    pub fn analyze(
        input: &WorksheetInput,
        enriched: &EnrichedWorksheet,
        context: &Context,
    ) -> ProblemDefinitionAnalysis {
        let problem = input.field(FieldKey::WhatProblem);
        let problem_lower = problem.to_lowercase();
        let problem_enriched = enriched.field(FieldKey::WhatProblem);

        let mut insights = Vec::new();
        let mut concerns = Vec::new();

        // Clarity: length tier + problem language + metric tier + causality.
        let mut clarity = CLARITY_LENGTH_TIERS
            .iter()
            .find(|(min_len, _)| problem.len() >= *min_len)
            .map(|(_, points)| *points)
            .unwrap_or(10);
        if PROBLEM_LANGUAGE.iter().any(|w| problem_lower.contains(w)) {
            clarity += 15;
        }
        clarity += match problem_enriched.metrics.len() {
            0 => 0,
            1..=2 => 10,
            3..=4 => 20,
            _ => 30,
        };
        if problem_enriched.patterns.has_causality {
            clarity += 15;
            insights.push("Problem statement explains cause and effect".to_string());
        }

        // Specificity: segment + roles + situational anchoring + precision words.
        let mut specificity = 0u32;
        if SEGMENT_TYPES.iter().any(|w| problem_lower.contains(w)) {
            specificity += 25;
        }
        if !problem_enriched.roles.is_empty() || !enriched.field(FieldKey::WhoAffected).roles.is_empty() {
            specificity += 25;
        }
        if SITUATIONAL_CONJUNCTIONS
            .iter()
            .any(|w| contains_word(&problem_lower, w))
        {
            specificity += 25;
        }
        let precision_hits = PRECISION_WORDS
            .iter()
            .filter(|w| problem_lower.contains(*w))
            .count() as u32;
        specificity += (precision_hits * 10).min(25);

        // Urgency: base 30, urgency words +40, loss/risk words +30.
        let mut urgency = 30u32;
        let combined_lower = input.combined_text();
        if URGENCY_WORDS.iter().any(|w| combined_lower.contains(w)) {
            urgency += 40;
        }
        if LOSS_RISK_WORDS.iter().any(|w| contains_word(&combined_lower, w)) {
            urgency += 30;
        }

        // Solvability: base 50, solution-exists phrasing +30, documented +20.
        let mut solvability = 50u32;
        if SOLUTION_EXISTS_RE.is_match(problem) {
            solvability += 30;
        }
        let well_documented = problem.len() > 100 && !problem_enriched.metrics.is_empty();
        if well_documented {
            solvability += 20;
        } else if problem.len() < 50 {
            concerns.push("Problem statement is too short to assess depth".to_string());
        }

        // Market relevance: base 40, industry-fit +40 for B2B SaaS, market words +20.
        let mut market_relevance = 40u32;
        if context.industry == Some(Industry::B2bSaas)
            && B2B_FIT_WORDS.iter().any(|w| combined_lower.contains(w))
        {
            market_relevance += 40;
        }
        if MARKET_WORDS.iter().any(|w| contains_word(&combined_lower, w)) {
            market_relevance += 20;
        }

        ProblemDefinitionAnalysis {
            clarity: Percentage::capped(clarity),
            specificity: Percentage::capped(specificity),
            urgency: Percentage::capped(urgency),
            solvability: Percentage::capped(solvability),
            market_relevance: Percentage::capped(market_relevance),
            insights,
            concerns,
        }
    }
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w == word)
}

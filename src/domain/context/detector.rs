//! Context detection over the full submission.
//!
//! Classification is keyword-density voting over the concatenated,
//! lower-cased worksheet text. All tables are fixed slices, so iteration
//! order (and therefore tie-breaking) is stable across calls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::enrichment::EnrichedWorksheet;
use crate::domain::worksheet::WorksheetInput;

/// Industry category inferred from signal keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    B2bSaas,
    Fintech,
    Healthcare,
    Ecommerce,
    DeveloperTools,
    Marketplace,
}

/// Signal keywords per industry, in voting order.
///
/// First entry wins a tie, so the order here is part of the contract.
const INDUSTRY_SIGNALS: &[(Industry, &[&str])] = &[
    (
        Industry::B2bSaas,
        &[
            "saas", "b2b", "subscription", "arr", "mrr", "churn", "seat", "enterprise software",
            "crm", "onboarding",
        ],
    ),
    (
        Industry::Fintech,
        &[
            "payments", "banking", "lending", "fintech", "compliance", "transactions",
            "invoicing", "treasury",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "patient", "clinic", "provider", "hipaa", "healthcare", "medical", "hospital",
            "telehealth",
        ],
    ),
    (
        Industry::Ecommerce,
        &[
            "ecommerce", "e-commerce", "shopify", "cart", "checkout", "retail", "merchandising",
            "fulfillment",
        ],
    ),
    (
        Industry::DeveloperTools,
        &[
            "developer", "sdk", "open source", "ci/cd", "deployment", "infrastructure", "devops",
            "observability",
        ],
    ),
    (
        Industry::Marketplace,
        &[
            "marketplace", "buyers and sellers", "two-sided", "liquidity", "supply side",
            "demand side", "listings",
        ],
    ),
];

/// Business stage inferred from funding/traction phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PreProductMarketFit,
    EarlyProductMarketFit,
    GrowthStage,
    Enterprise,
}

/// Stage patterns in priority order; first match wins.
static STAGE_PATTERNS: Lazy<Vec<(Stage, Regex)>> = Lazy::new(|| {
    vec![
        (
            Stage::PreProductMarketFit,
            Regex::new(r"(?i)\b(?:pre-seed|seed stage|seed round|mvp|prototype|pre-revenue)\b")
                .expect("valid stage regex"),
        ),
        (
            Stage::EarlyProductMarketFit,
            Regex::new(r"(?i)\$[1-3]M\b|\bseries a\b").expect("valid stage regex"),
        ),
        (
            Stage::GrowthStage,
            Regex::new(r"(?i)\$(?:[5-9]|10)M\b|\bseries b\b").expect("valid stage regex"),
        ),
        (
            Stage::Enterprise,
            Regex::new(r"(?i)\$[2-5]0M\+?\b|\benterprise(?:\s+sales)?\b")
                .expect("valid stage regex"),
        ),
    ]
});

/// Urgency of the problem as expressed by the founder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
}

const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "immediately",
    "critical",
    "asap",
    "right now",
    "pressing",
    "deadline",
    "every day",
    "bleeding",
    "losing",
];

/// Analytical sophistication bucket of the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sophistication {
    Beginner,
    Intermediate,
    Advanced,
}

/// Terms that signal familiarity with GTM analysis frameworks.
const SOPHISTICATED_TERMS: &[&str] = &[
    "tam",
    "sam",
    "som",
    "cac",
    "ltv",
    "arr",
    "mrr",
    "nrr",
    "jobs to be done",
    "product-market fit",
    "unit economics",
    "cohort analysis",
    "win/loss",
    "design partner",
];

/// Points per extracted metric when scoring sophistication.
const SOPHISTICATION_POINTS_PER_METRIC: u32 = 5;

/// Points per matched sophisticated term.
const SOPHISTICATION_POINTS_PER_TERM: u32 = 10;

/// Classification of the whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub industry: Option<Industry>,
    pub stage: Option<Stage>,
    pub urgency: Urgency,
    pub sophistication: Sophistication,
    /// Framework-vocabulary matches. Unlike the sophistication band this
    /// count is independent of metric density, so scoring rules keyed to
    /// it cannot move when a figure is added to a field.
    pub framework_terms: u32,
}

/// Classifies a submission from its combined text and enrichment.
pub fn detect_context(input: &WorksheetInput, enriched: &EnrichedWorksheet) -> Context {
    let combined = input.combined_text();
    let framework_terms = count_framework_terms(&combined);
    Context {
        industry: detect_industry(&combined),
        stage: detect_stage(&combined),
        urgency: detect_urgency(&combined),
        sophistication: detect_sophistication(framework_terms, enriched),
        framework_terms,
    }
}

fn detect_industry(combined: &str) -> Option<Industry> {
    let mut best: Option<(Industry, usize)> = None;
    for (industry, signals) in INDUSTRY_SIGNALS {
        let hits = signals.iter().filter(|kw| combined.contains(*kw)).count();
        if hits == 0 {
            continue;
        }
        // Strictly-highest wins; ties keep the earlier industry.
        match best {
            Some((_, best_hits)) if hits <= best_hits => {}
            _ => best = Some((*industry, hits)),
        }
    }
    best.map(|(industry, _)| industry)
}

fn detect_stage(combined: &str) -> Option<Stage> {
    STAGE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(combined))
        .map(|(stage, _)| *stage)
}

fn detect_urgency(combined: &str) -> Urgency {
    if URGENCY_KEYWORDS.iter().any(|kw| combined.contains(kw)) {
        Urgency::High
    } else {
        Urgency::Medium
    }
}

fn count_framework_terms(combined: &str) -> u32 {
    SOPHISTICATED_TERMS
        .iter()
        .filter(|term| contains_term(combined, term))
        .count() as u32
}

fn detect_sophistication(framework_terms: u32, enriched: &EnrichedWorksheet) -> Sophistication {
    let metric_points = enriched.total_metric_count() as u32 * SOPHISTICATION_POINTS_PER_METRIC;
    let term_points = framework_terms * SOPHISTICATION_POINTS_PER_TERM;
    let score = (metric_points + term_points).min(100);

    match score {
        0..=39 => Sophistication::Beginner,
        40..=70 => Sophistication::Intermediate,
        _ => Sophistication::Advanced,
    }
}

/// Whole-word containment for short acronyms, substring for phrases.
fn contains_term(combined: &str, term: &str) -> bool {
    if term.contains(' ') || term.contains('/') || term.contains('-') {
        combined.contains(term)
    } else {
        combined
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_for(input: WorksheetInput) -> Context {
        let enriched = EnrichedWorksheet::from_input(&input);
        detect_context(&input, &enriched)
    }

    #[test]
    fn empty_submission_has_null_industry_and_stage() {
        let ctx = context_for(WorksheetInput::default());
        assert_eq!(ctx.industry, None);
        assert_eq!(ctx.stage, None);
        assert_eq!(ctx.urgency, Urgency::Medium);
        assert_eq!(ctx.sophistication, Sophistication::Beginner);
    }

    #[test]
    fn industry_vote_picks_highest_density() {
        let ctx = context_for(WorksheetInput {
            problem: "Our B2B SaaS product sees churn during onboarding".to_string(),
            impact: "MRR drops and enterprise software deals slip".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.industry, Some(Industry::B2bSaas));
    }

    #[test]
    fn industry_tie_keeps_first_encountered() {
        // One hit each for B2B SaaS ("saas") and fintech ("payments").
        let ctx = context_for(WorksheetInput {
            problem: "A saas tool for payments teams".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.industry, Some(Industry::B2bSaas));
    }

    #[test]
    fn stage_patterns_match_in_priority_order() {
        let ctx = context_for(WorksheetInput {
            when: "We are at the MVP stage".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.stage, Some(Stage::PreProductMarketFit));

        let ctx = context_for(WorksheetInput {
            when: "Just raised our Series A".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.stage, Some(Stage::EarlyProductMarketFit));

        let ctx = context_for(WorksheetInput {
            when: "Closing a Series B".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.stage, Some(Stage::GrowthStage));

        let ctx = context_for(WorksheetInput {
            when: "Selling into enterprise accounts at $30M ARR".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.stage, Some(Stage::Enterprise));
    }

    #[test]
    fn urgency_keyword_raises_urgency_to_high() {
        let ctx = context_for(WorksheetInput {
            impact: "We are losing deals every week".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.urgency, Urgency::High);
    }

    #[test]
    fn sophistication_buckets_from_metrics_and_terms() {
        // 5 metrics (25 pts) + CAC, LTV, TAM (30 pts) = 55 -> Intermediate.
        let ctx = context_for(WorksheetInput {
            impact: "CAC is $400, LTV $2K, churn 5% across 300 customers in a $1B TAM"
                .to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.sophistication, Sophistication::Intermediate);
    }

    #[test]
    fn framework_terms_count_vocabulary_not_metrics() {
        let jargon_free = context_for(WorksheetInput {
            impact: "$400 lost on 5% of 300 customers over 2 weeks".to_string(),
            ..Default::default()
        });
        assert_eq!(jargon_free.framework_terms, 0);

        let fluent = context_for(WorksheetInput {
            impact: "Our CAC exceeds LTV and unit economics are upside down".to_string(),
            ..Default::default()
        });
        assert_eq!(fluent.framework_terms, 3);
    }

    #[test]
    fn acronym_terms_require_whole_words() {
        // "tamper" must not count as TAM.
        let ctx = context_for(WorksheetInput {
            problem: "Users tamper with settings".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.sophistication, Sophistication::Beginner);
    }
}

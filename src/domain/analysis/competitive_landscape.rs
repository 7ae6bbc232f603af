//! Competitive landscape analyzer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::enrichment::EnrichedWorksheet;
use crate::domain::foundation::Percentage;
use crate::domain::worksheet::{FieldKey, WorksheetInput};

const SOLUTION_CATEGORY_WORDS: &[&str] = &[
    "spreadsheet",
    "spreadsheets",
    "manual",
    "tool",
    "software",
    "consultants",
    "in-house",
    "excel",
    "hire",
    "outsource",
];

static PRICING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\d|\bprice\b|\bpricing\b|\bcost per\b|\bsubscription\b|\bper seat\b")
        .expect("valid pricing regex")
});

const WEAKNESS_WORDS: &[&str] = &[
    "doesn't",
    "does not",
    "fails",
    "slow",
    "manual",
    "clunky",
    "limited",
    "expensive",
    "painful",
    "error-prone",
    "fragile",
];

const GAP_WORDS: &[&str] = &["lack", "lacks", "missing", "without", "cannot", "no way to"];

/// Length tiers for awareness (character count of the how-solving field).
const AWARENESS_LENGTH_TIERS: [(usize, u32); 4] = [(200, 80), (100, 60), (30, 40), (0, 20)];

/// Sub-scores for competitive landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveLandscapeAnalysis {
    pub awareness: Percentage,
    pub differentiation: Percentage,
    pub positioning: Percentage,
    pub insights: Vec<String>,
    pub concerns: Vec<String>,
}

/// Analyzer for awareness of alternatives and differentiation from them.
pub struct CompetitiveLandscapeAnalyzer;

impl CompetitiveLandscapeAnalyzer {
    /// Scores the competitive landscape. Pure and total.
    pub fn analyze(
        input: &WorksheetInput,
        enriched: &EnrichedWorksheet,
    ) -> CompetitiveLandscapeAnalysis {
        let current = input.field(FieldKey::HowSolving);
        let current_lower = current.to_lowercase();
        let current_enriched = enriched.field(FieldKey::HowSolving);
        let mut insights = Vec::new();
        let mut concerns = Vec::new();

        // Awareness: length tier + category wording + pricing mention.
        let mut awareness = AWARENESS_LENGTH_TIERS
            .iter()
            .find(|(min_len, _)| current.len() >= *min_len)
            .map(|(_, points)| *points)
            .unwrap_or(20);
        if SOLUTION_CATEGORY_WORDS
            .iter()
            .any(|w| current_lower.contains(w))
        {
            awareness += 15;
        }
        if PRICING_RE.is_match(current) {
            awareness += 10;
            insights.push("Alternatives are priced, not just named".to_string());
        }
        let awareness = awareness.min(100);

        // Differentiation: weakness base, comparison and gap bonuses.
        let mut differentiation = if WEAKNESS_WORDS.iter().any(|w| current_lower.contains(w)) {
            60
        } else {
            concerns.push("No weaknesses of current alternatives identified".to_string());
            30
        };
        if current_enriched.patterns.has_comparison {
            differentiation += 20;
        }
        if GAP_WORDS.iter().any(|w| current_lower.contains(w)) {
            differentiation += 15;
        }
        let differentiation = differentiation.min(100);

        // Positioning is the midpoint of the two.
        let positioning = ((awareness + differentiation) as f64 / 2.0).round() as u32;

        CompetitiveLandscapeAnalysis {
            awareness: Percentage::capped(awareness),
            differentiation: Percentage::capped(differentiation),
            positioning: Percentage::capped(positioning),
            insights,
            concerns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(input: &WorksheetInput) -> CompetitiveLandscapeAnalysis {
        let enriched = EnrichedWorksheet::from_input(input);
        CompetitiveLandscapeAnalyzer::analyze(input, &enriched)
    }

    #[test]
    fn empty_input_gets_floor_scores() {
        let analysis = analyze(&WorksheetInput::default());
        assert_eq!(analysis.awareness.value(), 20);
        assert_eq!(analysis.differentiation.value(), 30);
        assert_eq!(analysis.positioning.value(), 25);
    }

    #[test]
    fn awareness_rewards_detail_category_and_pricing() {
        let input = WorksheetInput {
            current_solutions: "Most teams stitch together spreadsheets and a legacy tool, or \
                                hire consultants at $200 per hour; a few built in-house \
                                scripts that nobody maintains anymore."
                .to_string(),
            ..Default::default()
        };
        let analysis = analyze(&input);
        // Length tier 60 + category 15 + pricing 10 = 85.
        assert_eq!(analysis.awareness.value(), 85);
    }

    #[test]
    fn differentiation_stacks_weakness_comparison_and_gaps() {
        let input = WorksheetInput {
            current_solutions: "Existing tools are slow and clunky compared to what reps \
                                need; they lack forecasting and cannot handle renewals."
                .to_string(),
            ..Default::default()
        };
        let analysis = analyze(&input);
        // Weakness 60 + comparison 20 + gaps 15 = 95.
        assert_eq!(analysis.differentiation.value(), 95);
    }

    #[test]
    fn positioning_is_midpoint_of_awareness_and_differentiation() {
        let input = WorksheetInput {
            current_solutions: "Spreadsheets, mostly manual".to_string(),
            ..Default::default()
        };
        let analysis = analyze(&input);
        let expected = ((analysis.awareness.value() as f64
            + analysis.differentiation.value() as f64)
            / 2.0)
            .round() as u8;
        assert_eq!(analysis.positioning.value(), expected);
    }
}

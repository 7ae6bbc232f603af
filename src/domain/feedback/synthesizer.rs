//! Feedback synthesis.
//!
//! Every dimension always gets a summary sentence chosen by a fixed
//! score ladder, at least one strength bullet, and at least one
//! improvement bullet. Bullets derive from the same analyzer sub-scores
//! the aggregator consumed, so feedback can never contradict the score.

use crate::domain::analysis::WorksheetAnalyses;
use crate::domain::foundation::{Dimension, Percentage};

/// Score ladder boundaries shared by all dimensions.
const EXCELLENT_THRESHOLD: u8 = 85;
const GOOD_THRESHOLD: u8 = 70;
const DEVELOPING_THRESHOLD: u8 = 50;

/// Sub-score level treated as a strength.
const STRENGTH_THRESHOLD: u8 = 70;

/// Sub-score level treated as needing work.
const WEAKNESS_THRESHOLD: u8 = 50;

/// Per-dimension template: summary ladder wording plus bullet sources.
pub struct FeedbackTemplate {
    pub dimension: Dimension,
    pub excellent: &'static str,
    pub good: &'static str,
    pub developing: &'static str,
    pub weak: &'static str,
    /// Extracts (label, value) pairs for bullet derivation.
    pub sub_scores: fn(&WorksheetAnalyses) -> Vec<(&'static str, Percentage)>,
}

/// Registry mapping each dimension to its feedback template.
pub const FEEDBACK_TEMPLATES: [FeedbackTemplate; 5] = [
    FeedbackTemplate {
        dimension: Dimension::ProblemClarity,
        excellent: "The problem is articulated with excellent clarity and precision.",
        good: "The problem is clearly described with good supporting detail.",
        developing: "The problem statement is developing but needs sharper definition.",
        weak: "The problem statement is too vague to anchor a go-to-market plan.",
        sub_scores: |a| {
            vec![
                ("problem clarity", a.problem_definition.clarity),
                ("specificity of the affected situation", a.problem_definition.specificity),
                ("urgency framing", a.problem_definition.urgency),
                ("solvability assessment", a.problem_definition.solvability),
                ("market relevance", a.problem_definition.market_relevance),
            ]
        },
    },
    FeedbackTemplate {
        dimension: Dimension::MarketUnderstanding,
        excellent: "Market dynamics are quantified and well understood.",
        good: "The market opportunity is described with solid grounding.",
        developing: "Market understanding is forming but lacks hard numbers.",
        weak: "The market opportunity is asserted rather than evidenced.",
        sub_scores: |a| {
            vec![
                ("market sizing", a.market_opportunity.size),
                ("growth trajectory", a.market_opportunity.growth),
                ("market accessibility", a.market_opportunity.accessibility),
                ("timing rationale", a.market_opportunity.timing),
                ("quantified evidence", a.market_opportunity.quantification),
            ]
        },
    },
    FeedbackTemplate {
        dimension: Dimension::CustomerEmpathy,
        excellent: "Customer knowledge is deep, segmented, and validated at scale.",
        good: "The customer is well characterized with real validation behind it.",
        developing: "Customer understanding is emerging but validation is thin.",
        weak: "The customer is described in broad strokes without validation.",
        sub_scores: |a| {
            vec![
                ("customer depth", a.customer_understanding.depth),
                ("segment awareness", a.customer_understanding.segmentation),
                ("validation evidence", a.customer_understanding.validation),
                ("jobs-to-be-done framing", a.customer_understanding.jobs_to_be_done),
            ]
        },
    },
    FeedbackTemplate {
        dimension: Dimension::ValueQuantification,
        excellent: "The cost of the problem is quantified from multiple angles.",
        good: "The value at stake is quantified with credible figures.",
        developing: "Some quantification exists but the value story is incomplete.",
        weak: "The cost of the problem is not quantified.",
        sub_scores: |a| {
            vec![
                ("quantified evidence density", a.market_opportunity.quantification),
                ("market sizing", a.market_opportunity.size),
            ]
        },
    },
    FeedbackTemplate {
        dimension: Dimension::SolutionDifferentiation,
        excellent: "Alternatives are mapped and the differentiation case is sharp.",
        good: "Competitive alternatives are understood with clear gaps identified.",
        developing: "Competitive awareness is forming but differentiation is implicit.",
        weak: "Current alternatives and their weaknesses are unexamined.",
        sub_scores: |a| {
            vec![
                ("competitive awareness", a.competitive_landscape.awareness),
                ("differentiation case", a.competitive_landscape.differentiation),
                ("positioning", a.competitive_landscape.positioning),
            ]
        },
    },
];

/// Synthesizes the formatted feedback string for each dimension.
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    /// Produces the feedback block for one dimension. Never empty.
    pub fn feedback(
        dimension: Dimension,
        percentage: Percentage,
        analyses: &WorksheetAnalyses,
    ) -> String {
        let template = FEEDBACK_TEMPLATES
            .iter()
            .find(|t| t.dimension == dimension)
            .expect("every dimension has a template");

        let summary = if percentage.value() >= EXCELLENT_THRESHOLD {
            template.excellent
        } else if percentage.value() >= GOOD_THRESHOLD {
            template.good
        } else if percentage.value() >= DEVELOPING_THRESHOLD {
            template.developing
        } else {
            template.weak
        };

        let sub_scores = (template.sub_scores)(analyses);

        let mut strengths: Vec<String> = sub_scores
            .iter()
            .filter(|(_, value)| value.value() >= STRENGTH_THRESHOLD)
            .map(|(label, value)| format!("Strong {} ({})", label, value))
            .collect();
        if strengths.is_empty() {
            strengths.push("Assessment started - a foundation exists to build on".to_string());
        }

        let mut improvements: Vec<String> = sub_scores
            .iter()
            .filter(|(_, value)| value.value() < WEAKNESS_THRESHOLD)
            .map(|(label, value)| format!("Develop {} (currently {})", label, value))
            .collect();
        if improvements.is_empty() {
            improvements.push("Keep deepening the evidence behind this dimension".to_string());
        }

        let mut out = String::from(summary);
        out.push_str("\n\n");
        for strength in &strengths {
            out.push_str("\u{2713} ");
            out.push_str(strength);
            out.push('\n');
        }
        for improvement in &improvements {
            out.push_str("\u{2717} ");
            out.push_str(improvement);
            out.push('\n');
        }
        out
    }
}

//! Pipeline orchestration.
//!
//! [`AnalysisEngine::analyze`] runs the whole pipeline: normalize,
//! enrich, classify, analyze, aggregate, then synthesize feedback and
//! recommendations from the aggregate. Every call is an independent
//! pure computation; the only non-deterministic output is the
//! informational timestamp, which never influences a score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::WorksheetAnalyses;
use crate::domain::context::{detect_context, Context};
use crate::domain::enrichment::EnrichedWorksheet;
use crate::domain::feedback::FeedbackSynthesizer;
use crate::domain::foundation::{Dimension, Timestamp};
use crate::domain::recommendation::{Recommendation, RecommendationGenerator};
use crate::domain::scoring::{EvaluationScore, ScoreCard, ScoringAggregator};
use crate::domain::worksheet::WorksheetInput;

/// Narrative sections of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisNarrative {
    pub executive_summary: String,
    pub strengths_and_weaknesses: String,
    pub critical_gaps: String,
    pub opportunities: String,
}

/// Strategic framing derived from the score card and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicInsights {
    pub market_position: String,
    pub growth_levers: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Where this submission sits against typical founder submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub band: String,
    pub typical_range: String,
    pub comparison: String,
}

/// Sequenced follow-up actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSteps {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// The full result of one worksheet analysis. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall maturity score, 0-100.
    pub score: u8,
    /// Confidence in the assessment, 0.0-1.0.
    pub confidence: f64,
    /// Informational only; never score-affecting.
    pub timestamp: String,
    pub analysis: AnalysisNarrative,
    pub detailed_scores: BTreeMap<Dimension, EvaluationScore>,
    pub recommendations: Vec<Recommendation>,
    pub strategic_insights: StrategicInsights,
    pub benchmark_comparison: BenchmarkComparison,
    pub next_steps: NextSteps,
    pub expert_advice: String,
}

/// The deterministic worksheet analysis engine. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes a worksheet, stamping the current time.
    pub fn analyze(&self, input: &WorksheetInput) -> AnalysisResult {
        self.analyze_at(input, Timestamp::now())
    }

    /// Analyzes a worksheet with an explicit timestamp.
    ///
    /// Everything except the timestamp is a pure function of `input`.
    pub fn analyze_at(&self, input: &WorksheetInput, at: Timestamp) -> AnalysisResult {
        let enriched = EnrichedWorksheet::from_input(input);
        let context = detect_context(input, &enriched);
        let analyses = WorksheetAnalyses::analyze(input, &enriched, &context);
        let card = ScoringAggregator::score(&analyses, &context);

        let detailed_scores: BTreeMap<Dimension, EvaluationScore> = Dimension::ALL
            .iter()
            .map(|dimension| {
                let percentage = card.percentage(*dimension);
                let feedback =
                    FeedbackSynthesizer::feedback(*dimension, percentage, &analyses);
                (
                    *dimension,
                    EvaluationScore::new(percentage, dimension.weight(), feedback),
                )
            })
            .collect();

        let recommendations = RecommendationGenerator::generate(&card, &context);
        let confidence = confidence_for(input, &enriched);

        AnalysisResult {
            score: card.overall,
            confidence,
            timestamp: at.to_iso8601(),
            analysis: narrative_for(&card, &analyses),
            detailed_scores,
            recommendations,
            strategic_insights: insights_for(&card, &context),
            benchmark_comparison: benchmark_for(card.overall),
            next_steps: next_steps_for(&card),
            expert_advice: expert_advice_for(&card),
        }
    }
}

/// Confidence grows with coverage and evidence density, never past 0.95.
fn confidence_for(input: &WorksheetInput, enriched: &EnrichedWorksheet) -> f64 {
    let mut confidence = 0.25;
    confidence += 0.05 * input.non_empty_field_count() as f64;
    confidence += (0.02 * enriched.total_metric_count() as f64).min(0.20);
    if enriched.iter().any(|(_, e)| e.patterns.has_evidence) {
        confidence += 0.10;
    }
    confidence.min(0.95)
}

fn narrative_for(card: &ScoreCard, analyses: &WorksheetAnalyses) -> AnalysisNarrative {
    let strongest = card.strongest_dimension();
    let weakest = card.weakest_dimension();

    let executive_summary = format!(
        "This worksheet scores {} out of 100. {} is the strongest dimension at {}, \
         while {} trails at {}.",
        card.overall,
        strongest.label(),
        card.percentage(strongest),
        weakest.label(),
        card.percentage(weakest),
    );

    let strengths_and_weaknesses = Dimension::ALL
        .iter()
        .map(|d| format!("{}: {}", d.label(), card.percentage(*d)))
        .collect::<Vec<_>>()
        .join("; ");

    let gaps: Vec<&str> = Dimension::ALL
        .iter()
        .filter(|d| card.percentage(**d).value() < 50)
        .map(|d| d.label())
        .collect();
    let critical_gaps = if gaps.is_empty() {
        "No dimension falls below the developing threshold.".to_string()
    } else {
        format!("Below the developing threshold: {}.", gaps.join(", "))
    };

    let opportunities = if analyses.customer_understanding.validation.value() >= 70 {
        "Validation evidence is strong enough to anchor early sales conversations."
            .to_string()
    } else {
        "Structured customer validation is the fastest path to a stronger worksheet."
            .to_string()
    };

    AnalysisNarrative {
        executive_summary,
        strengths_and_weaknesses,
        critical_gaps,
        opportunities,
    }
}

fn insights_for(card: &ScoreCard, context: &Context) -> StrategicInsights {
    let market_position = match context.industry {
        Some(industry) => format!(
            "Positioned in {:?} with overall maturity at {}%",
            industry, card.overall
        ),
        None => format!(
            "Industry not yet identifiable from the worksheet; overall maturity at {}%",
            card.overall
        ),
    };

    let mut growth_levers = Vec::new();
    if card
        .percentage(Dimension::CustomerEmpathy)
        .value()
        >= 60
    {
        growth_levers.push("Leverage validated customer relationships for referrals".to_string());
    }
    if card
        .percentage(Dimension::ValueQuantification)
        .value()
        >= 60
    {
        growth_levers.push("Lead sales conversations with the quantified cost of inaction".to_string());
    }
    if growth_levers.is_empty() {
        growth_levers.push("Build an evidence base before committing to a channel".to_string());
    }

    let mut risk_factors = Vec::new();
    if card.percentage(Dimension::SolutionDifferentiation).value() < 50 {
        risk_factors.push("Differentiation against incumbents is unproven".to_string());
    }
    if card.percentage(Dimension::MarketUnderstanding).value() < 50 {
        risk_factors.push("Market size and growth are not yet evidenced".to_string());
    }
    if risk_factors.is_empty() {
        risk_factors.push("Execution risk: keep evidence current as the market shifts".to_string());
    }

    StrategicInsights {
        market_position,
        growth_levers,
        risk_factors,
    }
}

/// Fixed peer-band table keyed by overall score.
fn benchmark_for(overall: u8) -> BenchmarkComparison {
    let (band, typical_range, comparison) = match overall {
        80..=100 => (
            "top decile",
            "75-100",
            "Stronger than the large majority of first-pass worksheets.",
        ),
        60..=79 => (
            "upper quartile",
            "55-75",
            "Ahead of the typical funded-founder submission.",
        ),
        40..=59 => (
            "middle band",
            "35-55",
            "In line with most early worksheet submissions.",
        ),
        _ => (
            "early band",
            "15-35",
            "Typical of a first draft before customer discovery.",
        ),
    };
    BenchmarkComparison {
        band: band.to_string(),
        typical_range: typical_range.to_string(),
        comparison: comparison.to_string(),
    }
}

fn next_steps_for(card: &ScoreCard) -> NextSteps {
    let weakest = card.weakest_dimension();
    NextSteps {
        immediate: vec![format!(
            "Address the weakest dimension first: {}",
            weakest.label()
        )],
        short_term: vec![
            "Work through the top recommendation's action plan".to_string(),
            "Re-run the assessment after each batch of interviews".to_string(),
        ],
        long_term: vec![
            "Graduate to the solution and GTM worksheets once this one scores 70+".to_string(),
        ],
    }
}

/// Advice keyed to the weakest dimension, so two identical worksheets
/// always receive identical advice.
fn expert_advice_for(card: &ScoreCard) -> String {
    match card.weakest_dimension() {
        Dimension::ProblemClarity => {
            "Sharpen the problem statement until a stranger can repeat it back: who is \
             stuck, on what, and how often."
                .to_string()
        }
        Dimension::MarketUnderstanding => {
            "Put a number on the market before polishing anything else; a bottom-up \
             count of reachable accounts beats an analyst quote."
                .to_string()
        }
        Dimension::CustomerEmpathy => {
            "Interviews are the highest-leverage hour you can spend this week; book \
             five with the exact role you named."
                .to_string()
        }
        Dimension::ValueQuantification => {
            "Quantify the pain in dollars and hours per account; unquantified problems \
             do not make budgets."
                .to_string()
        }
        Dimension::SolutionDifferentiation => {
            "Study how your customers cope today; your differentiation story lives in \
             what those workarounds fail to do."
                .to_string()
        }
    }
}

//! Property tests for the scoring invariants.
//!
//! The engine must stay inside its contract for arbitrary free text:
//! every score bounded, weights fixed, recommendations capped, and the
//! whole computation deterministic.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use gtm_compass::domain::engine::AnalysisEngine;
use gtm_compass::domain::foundation::{Dimension, Timestamp};
use gtm_compass::domain::worksheet::WorksheetInput;

fn at() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
}

fn field() -> impl Strategy<Value = String> {
    // Mixes prose, digits, currency and punctuation the analyzers key on.
    "[ a-zA-Z0-9$%.,;+x-]{0,400}"
}

fn worksheet() -> impl Strategy<Value = WorksheetInput> {
    (field(), field(), field(), field(), field(), field()).prop_map(
        |(who, problem, when, impact, current_solutions, evidence)| WorksheetInput {
            who,
            problem,
            when,
            impact,
            current_solutions,
            evidence,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn overall_score_and_dimensions_stay_bounded(input in worksheet()) {
        let result = AnalysisEngine::new().analyze_at(&input, at());

        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.detailed_scores.len(), 5);
        for score in result.detailed_scores.values() {
            prop_assert!(score.percentage.value() <= 100);
            prop_assert!(score.score.value() <= score.max_score);
            prop_assert_eq!(score.max_score, 20);
        }
    }

    #[test]
    fn dimension_weights_always_sum_to_one_hundred(input in worksheet()) {
        let result = AnalysisEngine::new().analyze_at(&input, at());
        let total: u32 = result
            .detailed_scores
            .values()
            .map(|s| u32::from(s.weight))
            .sum();
        prop_assert_eq!(total, 100);
    }

    #[test]
    fn confidence_stays_within_its_cap(input in worksheet()) {
        let result = AnalysisEngine::new().analyze_at(&input, at());
        prop_assert!(result.confidence >= 0.0);
        prop_assert!(result.confidence <= 0.95);
    }

    #[test]
    fn recommendations_never_overpromise(input in worksheet()) {
        let result = AnalysisEngine::new().analyze_at(&input, at());

        prop_assert!(result.recommendations.len() <= 5);
        let budget = u32::from(100 - result.score).min(25);
        let total: u32 = result
            .recommendations
            .iter()
            .map(|r| u32::from(r.expected_improvement))
            .sum();
        prop_assert!(total <= budget);
        for rec in &result.recommendations {
            prop_assert!(rec.expected_improvement >= 3);
        }
    }

    #[test]
    fn appending_a_metric_never_decreases_problem_clarity(input in worksheet()) {
        let engine = AnalysisEngine::new();
        let before = engine.analyze_at(&input, at());

        let mut richer = input.clone();
        richer.problem.push_str(" $50K");
        let after = engine.analyze_at(&richer, at());

        prop_assert!(
            after.detailed_scores[&Dimension::ProblemClarity].percentage
                >= before.detailed_scores[&Dimension::ProblemClarity].percentage
        );
    }

    #[test]
    fn identical_input_yields_identical_results(input in worksheet()) {
        let engine = AnalysisEngine::new();
        let first = engine.analyze_at(&input, at());
        let second = engine.analyze_at(&input, at());
        prop_assert_eq!(first, second);
    }
}

//! Scoring aggregator.
//!
//! Maps the six analyzer outputs onto the five evaluation dimensions via
//! a registry of scoring functions, applies the two contextual
//! adjustment rules in fixed order, and computes the weighted overall
//! score. The two adjustment rules are deliberately not generalized to
//! other stages or dimensions.

use std::collections::BTreeMap;

use crate::domain::analysis::WorksheetAnalyses;
use crate::domain::context::{Context, Stage};
use crate::domain::foundation::{Dimension, Percentage};

/// A raw dimension scorer over the combined analyses.
pub type DimensionScoreFn = fn(&WorksheetAnalyses) -> f64;

/// Registry mapping each dimension to its scoring function.
///
/// Adding a dimension means adding an entry here (and a feedback
/// template); nothing else in the aggregator changes.
pub const DIMENSION_SCORERS: [(Dimension, DimensionScoreFn); 5] = [
    (Dimension::ProblemClarity, problem_clarity),
    (Dimension::MarketUnderstanding, market_understanding),
    (Dimension::CustomerEmpathy, customer_empathy),
    (Dimension::ValueQuantification, value_quantification),
    (Dimension::SolutionDifferentiation, solution_differentiation),
];

/// The aggregated dimension percentages plus the overall score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    /// Weighted overall score, 0-100.
    pub overall: u8,
    /// Percentage per dimension after contextual adjustment.
    pub dimensions: BTreeMap<Dimension, Percentage>,
}

impl ScoreCard {
    /// Returns the percentage for a dimension.
    pub fn percentage(&self, dimension: Dimension) -> Percentage {
        self.dimensions[&dimension]
    }

    /// Returns the dimension with the lowest percentage.
    ///
    /// Canonical dimension order breaks ties, so the answer is stable.
    pub fn weakest_dimension(&self) -> Dimension {
        Dimension::ALL
            .iter()
            .copied()
            .min_by_key(|d| self.dimensions[d])
            .expect("five dimensions are always present")
    }

    /// Returns the dimension with the highest percentage.
    pub fn strongest_dimension(&self) -> Dimension {
        Dimension::ALL
            .iter()
            .copied()
            .max_by_key(|d| (self.dimensions[d], std::cmp::Reverse(*d)))
            .expect("five dimensions are always present")
    }
}

/// Aggregates analyzer outputs into the five-dimension score card.
pub struct ScoringAggregator;

impl ScoringAggregator {
    /// Computes the score card. Pure and total.
    pub fn score(analyses: &WorksheetAnalyses, context: &Context) -> ScoreCard {
        let mut raw: BTreeMap<Dimension, f64> = DIMENSION_SCORERS
            .iter()
            .map(|(dimension, scorer)| (*dimension, scorer(analyses)))
            .collect();

        // Contextual adjustments in fixed order. Pre-PMF founders are
        // judged more on empathy than on dollar figures; submissions with
        // no framework vocabulary get a uniform novice lift. The lift is
        // keyed to the term count, not the sophistication band: the band
        // also counts metrics, and losing the lift by adding a figure
        // would let a dimension score drop on strictly richer input.
        if context.stage == Some(Stage::PreProductMarketFit) {
            adjust(&mut raw, Dimension::ValueQuantification, 0.8);
            adjust(&mut raw, Dimension::CustomerEmpathy, 1.2);
        }
        if context.framework_terms == 0 {
            for dimension in Dimension::ALL {
                adjust(&mut raw, dimension, 1.1);
            }
        }

        let dimensions: BTreeMap<Dimension, Percentage> = raw
            .iter()
            .map(|(dimension, value)| (*dimension, Percentage::from_f64(*value)))
            .collect();

        let weight_total: f64 = Dimension::ALL.iter().map(|d| f64::from(d.weight())).sum();
        let weighted: f64 = Dimension::ALL
            .iter()
            .map(|d| f64::from(dimensions[d].value()) * f64::from(d.weight()))
            .sum();
        let overall = (weighted / weight_total).round() as u8;

        ScoreCard {
            overall,
            dimensions,
        }
    }
}

fn adjust(raw: &mut BTreeMap<Dimension, f64>, dimension: Dimension, factor: f64) {
    if let Some(value) = raw.get_mut(&dimension) {
        *value = (*value * factor).min(100.0);
    }
}

fn problem_clarity(a: &WorksheetAnalyses) -> f64 {
    let p = &a.problem_definition;
    0.30 * f64::from(p.clarity.value())
        + 0.25 * f64::from(p.specificity.value())
        + 0.15 * f64::from(p.urgency.value())
        + 0.15 * f64::from(p.solvability.value())
        + 0.15 * f64::from(p.market_relevance.value())
}

fn market_understanding(a: &WorksheetAnalyses) -> f64 {
    let m = &a.market_opportunity;
    0.30 * f64::from(m.size.value())
        + 0.20 * f64::from(m.growth.value())
        + 0.15 * f64::from(m.accessibility.value())
        + 0.15 * f64::from(m.timing.value())
        + 0.20 * f64::from(m.quantification.value())
}

fn customer_empathy(a: &WorksheetAnalyses) -> f64 {
    let c = &a.customer_understanding;
    0.35 * f64::from(c.depth.value())
        + 0.20 * f64::from(c.segmentation.value())
        + 0.30 * f64::from(c.validation.value())
        + 0.15 * f64::from(c.jobs_to_be_done.value())
}

/// Evidence-based point rule: quantified-metric tiers plus currency
/// diversity, rather than a weighted average.
fn value_quantification(a: &WorksheetAnalyses) -> f64 {
    let m = &a.market_opportunity;
    let mut points = 10u32;
    points += match m.metric_count {
        0 => 0,
        1..=2 => 25,
        3..=4 => 45,
        _ => 60,
    };
    if m.currency_figures >= 2 {
        points += 15;
    }
    if m.quantification.value() >= 70 {
        points += 15;
    }
    f64::from(points.min(100))
}

/// Evidence-based point rule over competitive awareness and
/// differentiation tiers.
fn solution_differentiation(a: &WorksheetAnalyses) -> f64 {
    let c = &a.competitive_landscape;
    let tier = |value: u8| -> u32 {
        match value {
            80..=100 => 35,
            60..=79 => 25,
            40..=59 => 15,
            _ => 5,
        }
    };
    let mut points = 10 + tier(c.awareness.value()) + tier(c.differentiation.value());
    if c.positioning.value() >= 70 {
        points += 15;
    }
    f64::from(points.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::{detect_context, Urgency};
    use crate::domain::enrichment::EnrichedWorksheet;
    use crate::domain::worksheet::WorksheetInput;

    fn score(input: &WorksheetInput) -> ScoreCard {
        let enriched = EnrichedWorksheet::from_input(input);
        let context = detect_context(input, &enriched);
        let analyses = WorksheetAnalyses::analyze(input, &enriched, &context);
        ScoringAggregator::score(&analyses, &context)
    }

    #[test]
    fn empty_worksheet_lands_in_the_low_band() {
        let card = score(&WorksheetInput::default());
        assert!(
            (15..=30).contains(&card.overall),
            "overall {} outside empty-input band",
            card.overall
        );
        assert_eq!(card.dimensions.len(), 5);
    }

    #[test]
    fn all_dimension_percentages_stay_in_range() {
        let card = score(&WorksheetInput {
            problem: "urgent critical losing $5B $9B 90% 80% 70% of 500 customers because \
                      everything fails immediately"
                .to_string(),
            ..Default::default()
        });
        for dimension in Dimension::ALL {
            assert!(card.percentage(dimension).value() <= 100);
        }
        assert!(card.overall <= 100);
    }

    #[test]
    fn novice_lift_applies_only_without_framework_vocabulary() {
        let plain = WorksheetInput {
            problem: "Reporting is manual".to_string(),
            ..Default::default()
        };
        let enriched = EnrichedWorksheet::from_input(&plain);
        let context = detect_context(&plain, &enriched);
        assert_eq!(context.framework_terms, 0);
        let analyses = WorksheetAnalyses::analyze(&plain, &enriched, &context);
        let lifted = ScoringAggregator::score(&analyses, &context);

        let fluent = Context {
            framework_terms: 1,
            ..context
        };
        let unlifted = ScoringAggregator::score(&analyses, &fluent);

        assert!(lifted.overall >= unlifted.overall);
        for dimension in Dimension::ALL {
            assert!(lifted.percentage(dimension) >= unlifted.percentage(dimension));
        }
    }

    #[test]
    fn extra_metric_never_drops_problem_clarity_across_the_band() {
        // Seven metrics sit at the top of the Beginner sophistication
        // band; the eighth crosses into Intermediate. The lift must not
        // vanish with it.
        let base = WorksheetInput {
            problem: "We lose 10% 20% 30% of 40 customers and 50 users over 6 weeks for $90"
                .to_string(),
            ..Default::default()
        };
        let mut richer = base.clone();
        richer.problem.push_str(" costing $50K");

        let before = score(&base);
        let after = score(&richer);

        assert!(
            after.percentage(Dimension::ProblemClarity)
                >= before.percentage(Dimension::ProblemClarity),
            "clarity fell from {} to {}",
            before.percentage(Dimension::ProblemClarity),
            after.percentage(Dimension::ProblemClarity)
        );
    }

    #[test]
    fn pre_pmf_shifts_weight_from_quantification_to_empathy() {
        let base = WorksheetInput {
            problem: "Founders are trying to reach their first customers".to_string(),
            evidence: "40 interviews so far".to_string(),
            ..Default::default()
        };
        let enriched = EnrichedWorksheet::from_input(&base);
        let neutral_context = Context {
            industry: None,
            stage: None,
            urgency: Urgency::Medium,
            sophistication: crate::domain::context::Sophistication::Intermediate,
            framework_terms: 1,
        };
        let pre_pmf_context = Context {
            stage: Some(Stage::PreProductMarketFit),
            ..neutral_context
        };
        let analyses = WorksheetAnalyses::analyze(&base, &enriched, &neutral_context);

        let neutral = ScoringAggregator::score(&analyses, &neutral_context);
        let adjusted = ScoringAggregator::score(&analyses, &pre_pmf_context);

        assert!(
            adjusted.percentage(Dimension::ValueQuantification)
                <= neutral.percentage(Dimension::ValueQuantification)
        );
        assert!(
            adjusted.percentage(Dimension::CustomerEmpathy)
                >= neutral.percentage(Dimension::CustomerEmpathy)
        );
    }

    #[test]
    fn weakest_dimension_is_stable_under_ties() {
        let card = score(&WorksheetInput::default());
        // Repeated calls agree.
        assert_eq!(card.weakest_dimension(), card.weakest_dimension());
    }

    #[test]
    fn registry_covers_every_dimension_exactly_once() {
        let mut seen: Vec<Dimension> = DIMENSION_SCORERS.iter().map(|(d, _)| *d).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Dimension::ALL.len());
    }
}

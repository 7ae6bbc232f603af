//! Recommendation generation.
//!
//! Dimensions are ranked by score gap, each gets a realistically bounded
//! improvement estimate, and the total promised improvement never
//! exceeds `min(100 - overall, 25)`. A final strategic recommendation
//! fills leftover headroom for weak overall scores.

use crate::domain::context::Context;
use crate::domain::foundation::{Dimension, Percentage};
use crate::domain::scoring::ScoreCard;

use super::plans::{playbook, GTM_FOUNDATION};
use super::{Priority, Recommendation};

/// At most this many recommendations are returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Improvements below this are noise and are dropped.
pub const MIN_IMPROVEMENT: u8 = 3;

/// Absolute ceiling on the summed improvement across recommendations.
const GLOBAL_IMPROVEMENT_LIMIT: u8 = 25;

/// Overall scores below this earn a strategic GTM-foundation recommendation.
const STRATEGIC_THRESHOLD: u8 = 60;

/// The strategic recommendation never promises more than this.
const STRATEGIC_MAX_IMPROVEMENT: u8 = 8;

/// Generates the prioritized recommendation list.
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Produces at most five recommendations. Pure and total.
    pub fn generate(card: &ScoreCard, context: &Context) -> Vec<Recommendation> {
        let budget = (100 - card.overall).min(GLOBAL_IMPROVEMENT_LIMIT);
        let mut spent: u8 = 0;
        let mut recommendations = Vec::new();

        // Rank descending by gap; canonical order breaks ties so the
        // output is stable.
        let mut ranked: Vec<(Dimension, Percentage)> = Dimension::ALL
            .iter()
            .map(|d| (*d, card.percentage(*d)))
            .collect();
        ranked.sort_by(|a, b| b.1.gap().cmp(&a.1.gap()).then(a.0.cmp(&b.0)));

        for (rank, (dimension, percentage)) in ranked.into_iter().enumerate() {
            let priority = match rank {
                0 => Priority::Critical,
                1..=2 => Priority::High,
                _ => Priority::Medium,
            };
            let Some(improvement) = bounded_improvement(percentage, priority, card.overall)
            else {
                continue;
            };
            // Clamp to remaining budget; skip rather than promise a
            // sliver below the floor.
            let improvement = improvement.min(budget - spent);
            if improvement < MIN_IMPROVEMENT {
                continue;
            }
            spent += improvement;

            let pb = playbook(dimension);
            recommendations.push(Recommendation {
                priority,
                dimension: dimension.label().to_string(),
                current_state: format!(
                    "{} is at {} maturity",
                    dimension.label(),
                    percentage
                ),
                target_state: format!(
                    "Raise {} to roughly {} through the steps below",
                    dimension.label(),
                    Percentage::capped(u32::from(percentage.value()) + u32::from(improvement)),
                ),
                expected_improvement: improvement,
                action_plan: pb.action_plan.iter().map(|s| s.to_string()).collect(),
                success_metrics: pb.success_metrics.iter().map(|s| s.to_string()).collect(),
            });
        }

        // Weak submissions also get a foundation-building play sized to
        // whatever budget remains.
        if card.overall < STRATEGIC_THRESHOLD {
            let remaining = budget - spent;
            let improvement = remaining.min(STRATEGIC_MAX_IMPROVEMENT);
            if improvement >= MIN_IMPROVEMENT {
                recommendations.push(strategic_recommendation(card, context, improvement));
            }
        }

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

/// Computes the bounded improvement estimate for one dimension.
///
/// Returns `None` when the estimate falls under the floor.
fn bounded_improvement(
    percentage: Percentage,
    priority: Priority,
    overall: u8,
) -> Option<u8> {
    let p = f64::from(percentage.value());
    let gap = 100.0 - p;

    let base = if p < 30.0 {
        (gap * 0.6).min(12.0)
    } else if p < 50.0 {
        (gap * 0.5).min(10.0)
    } else if p < 70.0 {
        (gap * 0.4).min(8.0)
    } else {
        (gap * 0.3).min(5.0)
    };

    let mut estimate = base * priority.improvement_factor();
    if overall > 70 {
        estimate *= 0.7;
    } else if overall < 40 {
        estimate *= 1.1;
    }

    let rounded = estimate.round() as u8;
    if rounded < MIN_IMPROVEMENT {
        return None;
    }
    let dimension_cap = (gap * 0.5).round() as u8;
    let bounded = rounded.min(dimension_cap);
    if bounded < MIN_IMPROVEMENT {
        return None;
    }
    Some(bounded)
}

fn strategic_recommendation(
    card: &ScoreCard,
    context: &Context,
    improvement: u8,
) -> Recommendation {
    let stage_note = match context.stage {
        Some(stage) => format!("{:?} stage", stage),
        None => "an unstated stage".to_string(),
    };
    Recommendation {
        priority: Priority::Strategic,
        dimension: "GTM Foundation".to_string(),
        current_state: format!(
            "Overall maturity is {}% at {}; the GTM foundation needs structure",
            card.overall, stage_note
        ),
        target_state: "A written GTM thesis with one channel experiment running".to_string(),
        expected_improvement: improvement,
        action_plan: GTM_FOUNDATION
            .action_plan
            .iter()
            .map(|s| s.to_string())
            .collect(),
        success_metrics: GTM_FOUNDATION
            .success_metrics
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

//! Component wear flagging and the composite risk score.

use fc_common::record::{ComponentState, RiskLevel};
use fc_config::params::{RiskThresholds, ScoreWeights};
use serde::Serialize;

/// Upper bound on the summed component contribution before weighting.
const COMPONENT_TERM_CAP: f64 = 100.0;

/// One flagged component with the numbers that flagged it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRisk {
    pub name: String,
    pub health_percentage: f64,
    pub remaining_life_percentage: f64,
    pub risk_level: RiskLevel,
}

/// Scan components for wear and keep the ones at risk, preserving input
/// order. A component is flagged when its remaining lifetime or health
/// falls below the flagging thresholds; a flagged component escalates to
/// high risk below the tighter escalation thresholds.
pub fn assess_components(
    components: &[ComponentState],
    thresholds: &RiskThresholds,
) -> Vec<ComponentRisk> {
    components
        .iter()
        .filter_map(|component| {
            let remaining = component.remaining_lifetime_percentage();
            let health = component.health_percentage;

            let flagged =
                remaining < thresholds.remaining_flag_pct || health < thresholds.health_flag_pct;
            if !flagged {
                return None;
            }

            let risk_level = if remaining < thresholds.remaining_high_pct
                || health < thresholds.health_high_pct
            {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };

            Some(ComponentRisk {
                name: component.name.clone(),
                health_percentage: health,
                remaining_life_percentage: remaining,
                risk_level,
            })
        })
        .collect()
}

/// Blend failure probability with component wear into a score in [0, 100].
///
/// The component sum is capped at 100 BEFORE weighting, so a fleet of worn
/// components saturates its 30% share instead of drowning the probability
/// term. A NaN probability contributes nothing.
pub fn risk_score(
    failure_probability: f64,
    components: &[ComponentRisk],
    weights: &ScoreWeights,
) -> f64 {
    let probability = if failure_probability.is_nan() {
        0.0
    } else {
        failure_probability.clamp(0.0, 1.0)
    };
    let base = probability * 100.0;

    let component_sum: f64 = components
        .iter()
        .map(|c| match c.risk_level {
            RiskLevel::High => weights.high_component_points,
            RiskLevel::Medium => weights.medium_component_points,
            RiskLevel::Low => 0.0,
        })
        .sum();
    let component_term = component_sum.min(COMPONENT_TERM_CAP);

    let total = weights.probability_weight * base + weights.component_weight * component_term;
    total.clamp(0.0, 100.0)
}

//! Property-based tests for risk scoring and schedule invariants.

use chrono::{Duration, TimeZone, Utc};
use fc_common::id::{EquipmentId, MaintenanceId};
use fc_common::record::{
    ComponentState, EquipmentRecord, MaintenanceRecord, MaintenanceStatus, RiskLevel,
};
use fc_config::params::{RiskThresholds, ScheduleParams, ScoreWeights};
use fc_core::risk::{assess_components, risk_score, ComponentRisk};
use fc_core::schedule::{build_schedule, MaintenanceType};
use proptest::prelude::*;

fn risk_level_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![Just(RiskLevel::Low), Just(RiskLevel::Medium), Just(RiskLevel::High)]
}

fn component_risk_strategy() -> impl Strategy<Value = ComponentRisk> {
    ("[a-z]{3,10}", 0.0..100.0f64, 0.0..100.0f64, risk_level_strategy()).prop_map(
        |(name, health, remaining, risk_level)| ComponentRisk {
            name,
            health_percentage: health,
            remaining_life_percentage: remaining,
            risk_level,
        },
    )
}

fn component_state_strategy() -> impl Strategy<Value = ComponentState> {
    ("[a-z]{3,10}", 1.0..1e5f64, 0.0..2e5f64, 0.0..100.0f64).prop_map(
        |(name, lifetime, used, health)| ComponentState {
            name,
            estimated_lifetime_hours: lifetime,
            current_usage_hours: used,
            health_percentage: health,
            risk_level: None,
            last_replacement_date: None,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// The composite score stays inside [0, 100] whatever the inputs,
    /// including out-of-range probabilities.
    #[test]
    fn risk_score_bounded(
        probability in -1.0..2.0f64,
        components in prop::collection::vec(component_risk_strategy(), 0..12),
    ) {
        let score = risk_score(probability, &components, &ScoreWeights::default());
        prop_assert!((0.0..=100.0).contains(&score), "score = {}", score);
    }

    /// Adding a flagged component never lowers the score.
    #[test]
    fn risk_score_monotone_in_components(
        probability in 0.0..1.0f64,
        components in prop::collection::vec(component_risk_strategy(), 0..8),
        extra in component_risk_strategy(),
    ) {
        let weights = ScoreWeights::default();
        let base = risk_score(probability, &components, &weights);
        let mut more = components.clone();
        more.push(extra);
        let bigger = risk_score(probability, &more, &weights);
        prop_assert!(bigger + 1e-9 >= base, "{} < {}", bigger, base);
    }

    /// Assessment only ever flags components that breach a threshold, and
    /// never hands out the low tier.
    #[test]
    fn assessment_flags_are_high_or_medium(
        components in prop::collection::vec(component_state_strategy(), 0..12),
    ) {
        let thresholds = RiskThresholds::default();
        let flagged = assess_components(&components, &thresholds);
        prop_assert!(flagged.len() <= components.len());
        for risk in &flagged {
            prop_assert!(
                risk.risk_level == RiskLevel::High || risk.risk_level == RiskLevel::Medium
            );
            prop_assert!(
                risk.remaining_life_percentage < thresholds.remaining_flag_pct
                    || risk.health_percentage < thresholds.health_flag_pct,
                "unflaggable component got through: remaining {} health {}",
                risk.remaining_life_percentage,
                risk.health_percentage
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Interval floors hold per tier, the next date sits exactly one
    /// interval after the anchor, and high risk always means corrective.
    #[test]
    fn schedule_respects_floors_and_anchor(
        risk in risk_level_strategy(),
        offsets in prop::collection::vec(0i64..400, 0..10),
        anchored in any::<bool>(),
    ) {
        let params = ScheduleParams::default();
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let history: Vec<MaintenanceRecord> = offsets
            .iter()
            .map(|&d| MaintenanceRecord {
                id: MaintenanceId::new(),
                equipment_id: EquipmentId::from("e1"),
                status: MaintenanceStatus::Completed,
                scheduled_date: None,
                completed_date: Some(start + Duration::days(d)),
                description: None,
                cost: None,
            })
            .collect();

        let mut equipment = EquipmentRecord::new(EquipmentId::from("e1"), "press");
        equipment.risk_level = risk;
        if anchored {
            equipment.last_maintenance_date = Some(start + Duration::days(400));
        }
        let now = start + Duration::days(500);

        let schedule = build_schedule(&equipment, &history, now, &params);

        let thin = history.len() < params.min_history_for_intervals;
        let floor = match risk {
            RiskLevel::High => if thin { params.default_interval_high } else { params.high_min_days },
            RiskLevel::Medium => if thin { params.default_interval_medium } else { params.medium_min_days },
            RiskLevel::Low => if thin { params.default_interval_low } else { 0 },
        };
        prop_assert!(
            schedule.recommended_interval_days >= floor,
            "interval {} under floor {} for {:?}",
            schedule.recommended_interval_days,
            floor,
            risk
        );

        let anchor = equipment.last_maintenance_date.unwrap_or(now);
        prop_assert_eq!(
            schedule.next_maintenance_date,
            anchor + Duration::days(schedule.recommended_interval_days)
        );
        prop_assert_eq!(schedule.priority, risk);
        prop_assert_eq!(
            schedule.maintenance_type == MaintenanceType::Corrective,
            risk == RiskLevel::High
        );
        prop_assert!(!schedule.recommendations.is_empty());
    }
}

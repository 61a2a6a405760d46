//! Maintenance schedule recommendation.
//!
//! Interval selection starts from the equipment's observed maintenance
//! rhythm when there is one, then tightens it by risk tier: high-risk
//! equipment gets half the observed interval (never under a week),
//! medium gets 70% (never under two weeks), low keeps the observed pace.
//! With little history the per-tier default intervals apply instead.

use crate::store::{EquipmentStore, MaintenanceStore};
use chrono::{DateTime, Duration, Utc};
use fc_common::error::{Error, Result};
use fc_common::id::EquipmentId;
use fc_common::record::{EquipmentRecord, MaintenanceRecord, RiskLevel};
use fc_config::params::{EngineConfig, ScheduleParams};
use serde::Serialize;
use std::sync::Arc;

/// Kind of maintenance to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceType::Preventive => write!(f, "preventive"),
            MaintenanceType::Corrective => write!(f, "corrective"),
        }
    }
}

/// Recommended maintenance plan for one piece of equipment.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceSchedule {
    pub equipment_id: EquipmentId,

    pub recommended_interval_days: i64,

    pub next_maintenance_date: DateTime<Utc>,

    pub maintenance_type: MaintenanceType,

    /// Human-readable actions: risk-tier guidance first, then
    /// per-component replace/inspect lines in component order.
    pub recommendations: Vec<String>,

    pub priority: RiskLevel,
}

/// Store-backed recommender.
#[derive(Clone)]
pub struct ScheduleRecommender {
    equipment: Arc<dyn EquipmentStore>,
    maintenance: Arc<dyn MaintenanceStore>,
    config: EngineConfig,
}

impl ScheduleRecommender {
    pub fn new(
        equipment: Arc<dyn EquipmentStore>,
        maintenance: Arc<dyn MaintenanceStore>,
        config: EngineConfig,
    ) -> Self {
        ScheduleRecommender { equipment, maintenance, config }
    }

    pub async fn recommend(&self, id: &EquipmentId) -> Result<MaintenanceSchedule> {
        let record = self
            .equipment
            .get_equipment(id)
            .await?
            .ok_or_else(|| Error::EquipmentNotFound { id: id.clone() })?;
        let history = self.maintenance.completed_maintenance(id).await?;

        let schedule = build_schedule(&record, &history, Utc::now(), &self.config.schedule);
        tracing::info!(
            equipment_id = %schedule.equipment_id,
            interval_days = schedule.recommended_interval_days,
            maintenance_type = %schedule.maintenance_type,
            priority = %schedule.priority,
            "maintenance schedule recommended"
        );
        Ok(schedule)
    }
}

/// Pure scheduling core. `history` must already be completed records
/// only; `now` anchors the next date when the equipment has never been
/// maintained.
pub fn build_schedule(
    equipment: &EquipmentRecord,
    history: &[MaintenanceRecord],
    now: DateTime<Utc>,
    params: &ScheduleParams,
) -> MaintenanceSchedule {
    let interval_days = recommended_interval(equipment.risk_level, history, params);

    let anchor = equipment.last_maintenance_date.unwrap_or(now);
    let next_maintenance_date = anchor + Duration::days(interval_days);

    let maintenance_type = if equipment.risk_level == RiskLevel::High {
        MaintenanceType::Corrective
    } else {
        MaintenanceType::Preventive
    };

    MaintenanceSchedule {
        equipment_id: equipment.id.clone(),
        recommended_interval_days: interval_days,
        next_maintenance_date,
        maintenance_type,
        recommendations: build_recommendations(equipment, params),
        priority: equipment.risk_level,
    }
}

fn recommended_interval(
    risk: RiskLevel,
    history: &[MaintenanceRecord],
    params: &ScheduleParams,
) -> i64 {
    if history.len() < params.min_history_for_intervals {
        return match risk {
            RiskLevel::High => params.default_interval_high,
            RiskLevel::Medium => params.default_interval_medium,
            RiskLevel::Low => params.default_interval_low,
        };
    }

    let mut dates: Vec<DateTime<Utc>> = history.iter().filter_map(|m| m.completed_date).collect();
    dates.sort();
    let intervals: Vec<i64> = dates.windows(2).map(|pair| (pair[1] - pair[0]).num_days()).collect();

    let average = if intervals.is_empty() {
        params.fallback_average_days
    } else {
        intervals.iter().sum::<i64>() as f64 / intervals.len() as f64
    };

    let scaled = match risk {
        RiskLevel::High => (average * params.high_factor).max(params.high_min_days as f64),
        RiskLevel::Medium => (average * params.medium_factor).max(params.medium_min_days as f64),
        RiskLevel::Low => average,
    };
    scaled as i64
}

fn build_recommendations(equipment: &EquipmentRecord, params: &ScheduleParams) -> Vec<String> {
    let mut recommendations: Vec<String> = match equipment.risk_level {
        RiskLevel::High => vec![
            "Perform complete preventive maintenance".to_string(),
            "Check critical components first".to_string(),
        ],
        RiskLevel::Medium => vec![
            "Perform a detailed inspection".to_string(),
            "Monitor operating parameters more frequently".to_string(),
        ],
        RiskLevel::Low => vec!["Follow the regular maintenance schedule".to_string()],
    };

    for component in &equipment.components {
        if component.health_percentage < params.component_replace_health {
            recommendations.push(format!("Replace {}", component.name));
        } else if component.health_percentage < params.component_inspect_health {
            recommendations.push(format!("Inspect {}", component.name));
        }
    }

    recommendations
}

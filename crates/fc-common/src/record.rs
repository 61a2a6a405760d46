//! Domain records for equipment, operational history, and maintenance.
//!
//! These are the documents the engine reads from its backing store. The
//! engine never mutates them; every analysis produces a fresh output
//! structure instead. Optional sensor channels stay `Option` so partially
//! instrumented equipment is representable without sentinel values.

use crate::id::{EquipmentId, MaintenanceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk tier. Ordering is severity: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse the lowercase wire form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Retired,
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentStatus::Active => write!(f, "active"),
            EquipmentStatus::Inactive => write!(f, "inactive"),
            EquipmentStatus::Maintenance => write!(f, "maintenance"),
            EquipmentStatus::Retired => write!(f, "retired"),
        }
    }
}

/// One timestamped sensor sample from the field.
///
/// `hours_used` is the only mandatory channel; everything else depends on
/// what the equipment is instrumented for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalReading {
    pub date: DateTime<Utc>,

    /// Hours of operation accumulated during this sample window.
    pub hours_used: f64,

    /// Operating temperature in degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Energy or fuel consumption for the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,

    /// Acoustic level in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<f64>,

    /// Vibration amplitude, normalized to [0, 1] by the ingesting sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibration: Option<f64>,

    /// Duty cycles completed during the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u32>,
}

/// A recorded failure of the equipment.
///
/// `hours_at_failure` is the cumulative operating-hours odometer at the
/// moment of failure. Events ingested from legacy systems may lack it;
/// the Weibull fit skips those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureEvent {
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_at_failure: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wear state of one replaceable component inside the equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentState {
    pub name: String,

    /// Rated lifetime in operating hours.
    pub estimated_lifetime_hours: f64,

    /// Operating hours accumulated since installation or last replacement.
    pub current_usage_hours: f64,

    /// Condition score in [0, 100], 100 meaning factory-new.
    pub health_percentage: f64,

    /// Risk tier assigned by the last analysis, if any. Analyses recompute
    /// this; it is carried for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_replacement_date: Option<DateTime<Utc>>,
}

impl ComponentState {
    /// Fraction of rated lifetime still remaining, as a percentage in
    /// [0, 100]. A non-positive rated lifetime yields 0.
    pub fn remaining_lifetime_percentage(&self) -> f64 {
        if self.estimated_lifetime_hours <= 0.0 {
            return 0.0;
        }
        let used = self.current_usage_hours / self.estimated_lifetime_hours;
        ((1.0 - used) * 100.0).clamp(0.0, 100.0)
    }
}

/// Stored equipment document: identity plus accumulated history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: EquipmentId,

    pub name: String,

    /// Equipment family used to select a failure model ("pump",
    /// "compressor", ...). Absent means the generic model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub status: EquipmentStatus,

    /// Equipment-level risk tier from the last health evaluation. The
    /// schedule recommender keys its intervals off this.
    #[serde(default)]
    pub risk_level: RiskLevel,

    /// Set when a health evaluation called for intervention.
    #[serde(default)]
    pub needs_maintenance: bool,

    #[serde(default)]
    pub components: Vec<ComponentState>,

    #[serde(default)]
    pub operational_data: Vec<OperationalReading>,

    /// Cumulative operating-hours odometer.
    #[serde(default)]
    pub total_usage_hours: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub failure_history: Vec<FailureEvent>,
}

impl EquipmentRecord {
    /// Convenience constructor for a bare record with no history.
    pub fn new(id: EquipmentId, name: impl Into<String>) -> Self {
        EquipmentRecord {
            id,
            name: name.into(),
            category: None,
            status: EquipmentStatus::Active,
            risk_level: RiskLevel::default(),
            needs_maintenance: false,
            components: Vec::new(),
            operational_data: Vec::new(),
            total_usage_hours: 0.0,
            last_maintenance_date: None,
            failure_history: Vec::new(),
        }
    }

    /// Failure odometer readings usable for lifetime-distribution fitting,
    /// in recorded order. Events without an odometer value are skipped.
    pub fn failure_hours(&self) -> Vec<f64> {
        self.failure_history
            .iter()
            .filter_map(|f| f.hours_at_failure)
            .collect()
    }
}

/// Workflow state of a maintenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceStatus::Scheduled => write!(f, "scheduled"),
            MaintenanceStatus::InProgress => write!(f, "in_progress"),
            MaintenanceStatus::Completed => write!(f, "completed"),
            MaintenanceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One maintenance intervention, scheduled or historical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,

    pub equipment_id: EquipmentId,

    #[serde(default)]
    pub status: MaintenanceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,

    /// Set when `status` reaches `Completed`. Interval statistics are
    /// derived from these dates only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

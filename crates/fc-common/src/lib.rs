//! Failcast common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the failcast
//! workspace:
//! - Equipment and maintenance identifiers
//! - Stored domain records (equipment, readings, failures, maintenance)
//! - Common error types with category and HTTP-status introspection

pub mod error;
pub mod id;
pub mod record;

pub use error::{Error, Result, StructuredError};
pub use id::{EquipmentId, MaintenanceId};
pub use record::{
    ComponentState, EquipmentRecord, EquipmentStatus, FailureEvent, MaintenanceRecord,
    MaintenanceStatus, OperationalReading, RiskLevel,
};

//! Failcast Engine Library
//!
//! This library provides the core functionality for failure forecasting:
//! - Equipment and maintenance stores behind async traits
//! - Operational-data analysis (summaries, anomalies, correlations)
//! - Component risk assessment and composite risk scoring
//! - Health evaluation over recent sensor readings
//! - Failure prediction blending a learned model with a Weibull fit
//! - Maintenance schedule recommendation
//! - Advisory text generation against an external model endpoint

pub mod analysis;
pub mod classifier;
pub mod generator;
pub mod health;
pub mod logging;
pub mod predict;
pub mod risk;
pub mod schedule;
pub mod store;

pub use analysis::{AnalysisReport, OperationalAnalyzer};
pub use classifier::{ClassifierProvider, FailureClassifier};
pub use generator::{HttpGenerator, RecommendationGenerator};
pub use health::{evaluate_health, HealthAssessment};
pub use logging::{init_default_logging, init_logging, LogConfig};
pub use predict::{FailurePredictor, ReliabilitySnapshot};
pub use risk::ComponentRisk;
pub use schedule::{MaintenanceSchedule, ScheduleRecommender};
pub use store::{EquipmentStore, MaintenanceStore, MemoryStore};

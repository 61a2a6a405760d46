//! Failcast engine configuration.
//!
//! This crate owns every tunable the scoring, prediction, and scheduling
//! paths consult: risk thresholds, score weights, prediction parameters,
//! the Weibull fallback, maintenance intervals, and the advisory-generator
//! endpoint. Configurations load from JSON, validate semantically, and ship
//! in three presets.

pub mod params;
pub mod preset;
pub mod validate;

pub use params::{
    EngineConfig, GeneratorConfig, PredictionParams, RiskThresholds, ScheduleParams, ScoreWeights,
    WeibullFallback,
};
pub use preset::{get_preset, PresetError, PresetName};
pub use validate::{validate_config, ValidationError, ValidationResult};

//! Engine tuning parameters.
//!
//! Every knob the scoring and scheduling paths consult lives here, with
//! defaults matching the calibrated production values. All containers take
//! `#[serde(default)]` so a partial JSON document overrides only the fields
//! it names.

use serde::{Deserialize, Serialize};

/// Complete engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: RiskThresholds,
    pub scoring: ScoreWeights,
    pub prediction: PredictionParams,
    pub weibull_fallback: WeibullFallback,
    pub schedule: ScheduleParams,
    pub generator: GeneratorConfig,
}

impl EngineConfig {
    /// Parse a configuration from a JSON document and validate it.
    pub fn from_json_str(s: &str) -> crate::validate::ValidationResult<Self> {
        let config: EngineConfig = serde_json::from_str(s)
            .map_err(|e| crate::validate::ValidationError::ParseError(e.to_string()))?;
        crate::validate::validate_config(&config)?;
        Ok(config)
    }
}

/// Component risk-flagging thresholds, all expressed as percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// A component is flagged when its remaining lifetime falls below this.
    pub remaining_flag_pct: f64,

    /// A component is flagged when its health falls below this.
    pub health_flag_pct: f64,

    /// A flagged component escalates to high risk below this remaining
    /// lifetime.
    pub remaining_high_pct: f64,

    /// A flagged component escalates to high risk below this health.
    pub health_high_pct: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            remaining_flag_pct: 30.0,
            health_flag_pct: 50.0,
            remaining_high_pct: 15.0,
            health_high_pct: 30.0,
        }
    }
}

/// Composite risk-score weights.
///
/// The probability term and the component term are first clamped to
/// [0, 100] individually, then blended; the weights must sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub probability_weight: f64,
    pub component_weight: f64,

    /// Points added to the component term per high-risk component.
    pub high_component_points: f64,

    /// Points added to the component term per medium-risk component.
    pub medium_component_points: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            probability_weight: 0.7,
            component_weight: 0.3,
            high_component_points: 30.0,
            medium_component_points: 15.0,
        }
    }
}

/// Failure-prediction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionParams {
    /// Below this many operational readings the learned model is skipped
    /// and `neutral_probability` stands in for its estimate.
    pub min_readings_for_model: usize,

    /// Below this many recorded failures no lifetime distribution is
    /// fitted and the statistical estimate is absent.
    pub min_failures_for_weibull: usize,

    /// Stand-in probability when evidence is too thin for the model.
    pub neutral_probability: f64,

    /// Weight of the learned-model estimate when blending with the
    /// statistical estimate. The statistical side gets the complement.
    pub ml_blend_weight: f64,

    /// Confidence reported on every prediction. Calibrated confidence is
    /// not implemented; this constant is surfaced as-is.
    pub static_confidence: f64,

    /// Conversion factor from horizon days to operating hours.
    pub hours_per_day: f64,

    /// Horizon used when the caller does not supply one.
    pub default_horizon_days: u32,
}

impl Default for PredictionParams {
    fn default() -> Self {
        PredictionParams {
            min_readings_for_model: 5,
            min_failures_for_weibull: 2,
            neutral_probability: 0.5,
            ml_blend_weight: 0.5,
            static_confidence: 0.7,
            hours_per_day: 24.0,
            default_horizon_days: 30,
        }
    }
}

/// Weibull parameters assumed when the failure sample is too small to fit.
///
/// The (1000, 2) pair models a generic wear-out lifetime of about a
/// thousand operating hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeibullFallback {
    pub scale: f64,
    pub shape: f64,
}

impl Default for WeibullFallback {
    fn default() -> Self {
        WeibullFallback {
            scale: 1000.0,
            shape: 2.0,
        }
    }
}

/// Maintenance scheduling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleParams {
    /// Completed maintenance records needed before observed intervals are
    /// trusted over the per-tier defaults.
    pub min_history_for_intervals: usize,

    /// Default interval in days per risk tier, used with thin history.
    pub default_interval_high: i64,
    pub default_interval_medium: i64,
    pub default_interval_low: i64,

    /// High-risk equipment: observed interval is scaled by this factor,
    /// floored at `high_min_days`.
    pub high_factor: f64,
    pub high_min_days: i64,

    /// Medium-risk equipment: observed interval scaled by this factor,
    /// floored at `medium_min_days`.
    pub medium_factor: f64,
    pub medium_min_days: i64,

    /// Average interval assumed when the history has enough completed
    /// records but no two carry consecutive completion dates.
    pub fallback_average_days: f64,

    /// Components below this health get a replacement recommendation.
    pub component_replace_health: f64,

    /// Components below this health (but at or above the replacement
    /// threshold) get an inspection recommendation.
    pub component_inspect_health: f64,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        ScheduleParams {
            min_history_for_intervals: 2,
            default_interval_high: 30,
            default_interval_medium: 60,
            default_interval_low: 90,
            high_factor: 0.5,
            high_min_days: 7,
            medium_factor: 0.7,
            medium_min_days: 14,
            fallback_average_days: 90.0,
            component_replace_health: 50.0,
            component_inspect_health: 70.0,
        }
    }
}

/// Advisory text-generator endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Generation endpoint, Ollama-compatible.
    pub url: String,

    /// Model name passed in the request body.
    pub model: String,

    /// Whole-request timeout in seconds. A timed-out call fails the
    /// prediction like any other transport error.
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            url: "http://localhost:11434/api/generate".to_string(),
            model: "llama3:8b".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeneratorConfig {
    /// Build from defaults plus `FAILCAST_GENERATOR_URL` and
    /// `FAILCAST_GENERATOR_MODEL` environment overrides.
    pub fn from_env() -> Self {
        let mut config = GeneratorConfig::default();
        if let Ok(url) = std::env::var("FAILCAST_GENERATOR_URL") {
            if !url.is_empty() {
                config.url = url;
            }
        }
        if let Ok(model) = std::env::var("FAILCAST_GENERATOR_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_calibrated() {
        let config = EngineConfig::default();
        assert_eq!(config.thresholds.remaining_flag_pct, 30.0);
        assert_eq!(config.thresholds.health_high_pct, 30.0);
        assert_eq!(config.scoring.probability_weight, 0.7);
        assert_eq!(config.scoring.component_weight, 0.3);
        assert_eq!(config.prediction.min_readings_for_model, 5);
        assert_eq!(config.prediction.static_confidence, 0.7);
        assert_eq!(config.weibull_fallback.scale, 1000.0);
        assert_eq!(config.weibull_fallback.shape, 2.0);
        assert_eq!(config.schedule.default_interval_low, 90);
        assert_eq!(config.schedule.high_min_days, 7);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let json = r#"{"scoring": {"probability_weight": 0.8, "component_weight": 0.2}}"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.scoring.probability_weight, 0.8);
        assert_eq!(config.scoring.component_weight, 0.2);
        // Untouched sections keep their defaults.
        assert_eq!(config.prediction.neutral_probability, 0.5);
        assert_eq!(config.schedule.medium_min_days, 14);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(EngineConfig::from_json_str("{not json").is_err());
    }
}

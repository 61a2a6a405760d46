//! Configuration validation errors and semantic validation.

use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Validate an engine configuration semantically.
///
/// Structural errors (types, syntax) are serde's job; this checks the
/// relationships a well-formed document can still get wrong.
pub fn validate_config(config: &crate::params::EngineConfig) -> ValidationResult<()> {
    validate_thresholds(&config.thresholds)?;
    validate_scoring(&config.scoring)?;
    validate_prediction(&config.prediction)?;
    validate_weibull_fallback(&config.weibull_fallback)?;
    validate_schedule(&config.schedule)?;
    validate_generator(&config.generator)?;
    Ok(())
}

fn validate_thresholds(t: &crate::params::RiskThresholds) -> ValidationResult<()> {
    for (field, value) in [
        ("thresholds.remaining_flag_pct", t.remaining_flag_pct),
        ("thresholds.health_flag_pct", t.health_flag_pct),
        ("thresholds.remaining_high_pct", t.remaining_high_pct),
        ("thresholds.health_high_pct", t.health_high_pct),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be in [0, 100], got {}", value),
            });
        }
    }

    // Escalation thresholds sit inside the flagging thresholds, otherwise
    // a component could be high risk without being flagged at all.
    if t.remaining_high_pct > t.remaining_flag_pct {
        return Err(ValidationError::SemanticError(format!(
            "remaining_high_pct ({}) must not exceed remaining_flag_pct ({})",
            t.remaining_high_pct, t.remaining_flag_pct
        )));
    }
    if t.health_high_pct > t.health_flag_pct {
        return Err(ValidationError::SemanticError(format!(
            "health_high_pct ({}) must not exceed health_flag_pct ({})",
            t.health_high_pct, t.health_flag_pct
        )));
    }

    Ok(())
}

fn validate_scoring(s: &crate::params::ScoreWeights) -> ValidationResult<()> {
    if s.probability_weight < 0.0 || s.component_weight < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "scoring".to_string(),
            message: "weights must be non-negative".to_string(),
        });
    }

    let weight_sum = s.probability_weight + s.component_weight;
    if (weight_sum - 1.0).abs() > 0.01 {
        return Err(ValidationError::SemanticError(format!(
            "scoring weights must sum to 1.0, got {} (probability={}, component={})",
            weight_sum, s.probability_weight, s.component_weight
        )));
    }

    if s.high_component_points < 0.0 || s.medium_component_points < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "scoring".to_string(),
            message: "component points must be non-negative".to_string(),
        });
    }
    if s.medium_component_points > s.high_component_points {
        return Err(ValidationError::SemanticError(format!(
            "medium_component_points ({}) must not exceed high_component_points ({})",
            s.medium_component_points, s.high_component_points
        )));
    }

    Ok(())
}

fn validate_prediction(p: &crate::params::PredictionParams) -> ValidationResult<()> {
    for (field, value) in [
        ("prediction.neutral_probability", p.neutral_probability),
        ("prediction.ml_blend_weight", p.ml_blend_weight),
        ("prediction.static_confidence", p.static_confidence),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be in [0, 1], got {}", value),
            });
        }
    }

    if p.hours_per_day <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "prediction.hours_per_day".to_string(),
            message: format!("Must be positive, got {}", p.hours_per_day),
        });
    }

    if p.default_horizon_days == 0 {
        return Err(ValidationError::InvalidValue {
            field: "prediction.default_horizon_days".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    if p.min_failures_for_weibull < 2 {
        return Err(ValidationError::InvalidValue {
            field: "prediction.min_failures_for_weibull".to_string(),
            message: "Must be at least 2; one failure cannot constrain both parameters".to_string(),
        });
    }

    Ok(())
}

fn validate_weibull_fallback(w: &crate::params::WeibullFallback) -> ValidationResult<()> {
    if w.scale <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "weibull_fallback.scale".to_string(),
            message: format!("Must be positive, got {}", w.scale),
        });
    }
    if w.shape <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "weibull_fallback.shape".to_string(),
            message: format!("Must be positive, got {}", w.shape),
        });
    }
    Ok(())
}

fn validate_schedule(s: &crate::params::ScheduleParams) -> ValidationResult<()> {
    for (field, value) in [
        ("schedule.default_interval_high", s.default_interval_high),
        ("schedule.default_interval_medium", s.default_interval_medium),
        ("schedule.default_interval_low", s.default_interval_low),
        ("schedule.high_min_days", s.high_min_days),
        ("schedule.medium_min_days", s.medium_min_days),
    ] {
        if value < 1 {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be at least 1 day, got {}", value),
            });
        }
    }

    for (field, value) in [
        ("schedule.high_factor", s.high_factor),
        ("schedule.medium_factor", s.medium_factor),
    ] {
        if !(0.0..=1.0).contains(&value) || value == 0.0 {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be in (0, 1], got {}", value),
            });
        }
    }

    if s.fallback_average_days < 1.0 || !s.fallback_average_days.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: "schedule.fallback_average_days".to_string(),
            message: format!("Must be at least 1 day, got {}", s.fallback_average_days),
        });
    }

    if s.component_replace_health > s.component_inspect_health {
        return Err(ValidationError::SemanticError(format!(
            "component_replace_health ({}) must not exceed component_inspect_health ({})",
            s.component_replace_health, s.component_inspect_health
        )));
    }
    for (field, value) in [
        ("schedule.component_replace_health", s.component_replace_health),
        ("schedule.component_inspect_health", s.component_inspect_health),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Must be in [0, 100], got {}", value),
            });
        }
    }

    Ok(())
}

fn validate_generator(g: &crate::params::GeneratorConfig) -> ValidationResult<()> {
    if g.url.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "generator.url".to_string(),
            message: "Must not be empty".to_string(),
        });
    }
    if g.model.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "generator.model".to_string(),
            message: "Must not be empty".to_string(),
        });
    }
    if g.timeout_secs == 0 {
        return Err(ValidationError::InvalidValue {
            field: "generator.timeout_secs".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }
    Ok(())
}

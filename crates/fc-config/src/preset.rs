//! Configuration presets for common deployment postures.
//!
//! Provides pre-built configurations for:
//! - Default: calibrated production values
//! - Aggressive: earlier flagging and tighter maintenance intervals
//! - Relaxed: later flagging and wider intervals for low-criticality fleets

use crate::params::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    /// Calibrated production values.
    Default,
    /// Earlier flagging, tighter intervals, for critical equipment.
    Aggressive,
    /// Later flagging, wider intervals, for low-criticality fleets.
    Relaxed,
}

impl PresetName {
    /// All available preset names.
    pub const ALL: &'static [PresetName] = &[
        PresetName::Default,
        PresetName::Aggressive,
        PresetName::Relaxed,
    ];

    /// Get preset name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Default => "default",
            PresetName::Aggressive => "aggressive",
            PresetName::Relaxed => "relaxed",
        }
    }

    /// Parse preset name from string.
    pub fn parse(s: &str) -> Option<PresetName> {
        match s.to_lowercase().as_str() {
            "default" | "standard" => Some(PresetName::Default),
            "aggressive" | "critical" | "strict" => Some(PresetName::Aggressive),
            "relaxed" | "lenient" => Some(PresetName::Relaxed),
            _ => None,
        }
    }

    /// Get a description of the preset.
    pub fn description(&self) -> &'static str {
        match self {
            PresetName::Default => "Calibrated production thresholds and intervals",
            PresetName::Aggressive => {
                "Flags components earlier and tightens maintenance intervals"
            }
            PresetName::Relaxed => "Flags components later and widens maintenance intervals",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresetName {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::parse(s).ok_or_else(|| PresetError::UnknownPreset(s.to_string()))
    }
}

/// Errors related to preset operations.
#[derive(Debug, Clone)]
pub enum PresetError {
    /// Unknown preset name.
    UnknownPreset(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::UnknownPreset(name) => {
                write!(
                    f,
                    "Unknown preset '{}'. Available: {}",
                    name,
                    PresetName::ALL
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// Build the engine configuration for a preset.
pub fn get_preset(name: PresetName) -> EngineConfig {
    match name {
        PresetName::Default => EngineConfig::default(),
        PresetName::Aggressive => aggressive(),
        PresetName::Relaxed => relaxed(),
    }
}

fn aggressive() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.thresholds.remaining_flag_pct = 40.0;
    config.thresholds.health_flag_pct = 60.0;
    config.thresholds.remaining_high_pct = 20.0;
    config.thresholds.health_high_pct = 40.0;
    config.schedule.default_interval_high = 21;
    config.schedule.default_interval_medium = 45;
    config.schedule.default_interval_low = 60;
    config.schedule.high_factor = 0.4;
    config.schedule.medium_factor = 0.6;
    config
}

fn relaxed() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.thresholds.remaining_flag_pct = 20.0;
    config.thresholds.health_flag_pct = 40.0;
    config.thresholds.remaining_high_pct = 10.0;
    config.thresholds.health_high_pct = 20.0;
    config.schedule.default_interval_high = 45;
    config.schedule.default_interval_medium = 90;
    config.schedule.default_interval_low = 120;
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_config;

    #[test]
    fn test_every_preset_validates() {
        for name in PresetName::ALL {
            let config = get_preset(*name);
            assert!(
                validate_config(&config).is_ok(),
                "preset {} failed validation",
                name
            );
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(PresetName::parse("critical"), Some(PresetName::Aggressive));
        assert_eq!(PresetName::parse("LENIENT"), Some(PresetName::Relaxed));
        assert_eq!(PresetName::parse("bogus"), None);
    }

    #[test]
    fn test_aggressive_flags_earlier_than_default() {
        let default = get_preset(PresetName::Default);
        let aggressive = get_preset(PresetName::Aggressive);
        assert!(
            aggressive.thresholds.remaining_flag_pct > default.thresholds.remaining_flag_pct
        );
        assert!(
            aggressive.schedule.default_interval_low < default.schedule.default_interval_low
        );
    }
}

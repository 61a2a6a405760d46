//! Trend classification and rolling smoothing for sensor series.

use serde::Serialize;
use std::fmt;

/// Direction of a sensor series over its observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a series by the sign of its consecutive differences.
///
/// The series is increasing (or decreasing) when strictly more than 70% of
/// consecutive differences share that sign. Fewer than 3 samples, or a
/// mixed signal, classifies as stable. NaN differences count toward
/// neither direction.
pub fn classify_trend(values: &[f64]) -> TrendDirection {
    if values.len() < 3 {
        return TrendDirection::Stable;
    }

    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let pos_count = diffs.iter().filter(|&&d| d > 0.0).count();
    let neg_count = diffs.iter().filter(|&&d| d < 0.0).count();
    let threshold = 0.7 * diffs.len() as f64;

    if pos_count as f64 > threshold {
        TrendDirection::Increasing
    } else if neg_count as f64 > threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Rolling mean with a full window: output starts once `window` samples
/// are available, so the result has `len - window + 1` entries. Windows
/// containing NaN are dropped. Empty for `window == 0` or short input.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .filter(|m| !m.is_nan())
        .collect()
}

//! Short-window health evaluation from recent sensor readings.
//!
//! Looks at the last three readings for acute degradation signatures:
//! running hot or shaking harder than rated. This complements the
//! lifetime-based component analysis in [`crate::risk`], which sees slow
//! wear but not a bearing that started screaming yesterday.

use fc_common::record::{OperationalReading, RiskLevel};
use serde::Serialize;

/// Readings examined per evaluation.
const WINDOW: usize = 3;

/// Temperature above this is critical regardless of trend (degrees C).
const TEMP_CRITICAL: f64 = 80.0;
/// A strictly rising temperature ending above this is critical.
const TEMP_RISING_LIMIT: f64 = 70.0;
/// Temperature above this alone warrants closer monitoring.
const TEMP_WATCH: f64 = 60.0;

/// Vibration amplitude above this is critical regardless of trend.
const VIB_CRITICAL: f64 = 0.8;
/// A strictly rising vibration ending above this is critical.
const VIB_RISING_LIMIT: f64 = 0.6;
/// Vibration above this alone warrants closer monitoring.
const VIB_WATCH: f64 = 0.5;

/// Outcome of a health evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthAssessment {
    pub risk_level: RiskLevel,
    pub needs_maintenance: bool,
}

/// Evaluate the most recent readings for acute degradation.
///
/// Returns `None` with fewer than three readings; that is thin evidence,
/// not an error. Readings are re-sorted by date first, so append order
/// does not matter. When both the temperature and vibration rules fire,
/// the worse severity wins and the maintenance flags are OR-ed.
pub fn evaluate_health(readings: &[OperationalReading]) -> Option<HealthAssessment> {
    if readings.len() < WINDOW {
        return None;
    }

    let mut ordered: Vec<&OperationalReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.date);
    let recent = &ordered[ordered.len() - WINDOW..];

    let mut risk_level = RiskLevel::Low;
    let mut needs_maintenance = false;

    if let Some(temps) = channel_window(recent, |r| r.temperature) {
        let (level, maintain) =
            grade_channel(&temps, TEMP_CRITICAL, TEMP_RISING_LIMIT, TEMP_WATCH);
        risk_level = risk_level.max(level);
        needs_maintenance |= maintain;
    }

    if let Some(vibs) = channel_window(recent, |r| r.vibration) {
        let (level, maintain) = grade_channel(&vibs, VIB_CRITICAL, VIB_RISING_LIMIT, VIB_WATCH);
        risk_level = risk_level.max(level);
        needs_maintenance |= maintain;
    }

    Some(HealthAssessment { risk_level, needs_maintenance })
}

/// The channel over the whole window, or `None` when any reading lacks it.
fn channel_window(
    recent: &[&OperationalReading],
    get: impl Fn(&OperationalReading) -> Option<f64>,
) -> Option<[f64; WINDOW]> {
    Some([get(recent[0])?, get(recent[1])?, get(recent[2])?])
}

fn grade_channel(
    values: &[f64; WINDOW],
    critical: f64,
    rising_limit: f64,
    watch: f64,
) -> (RiskLevel, bool) {
    let last = values[WINDOW - 1];
    if last > critical || (strictly_rising(values) && last > rising_limit) {
        (RiskLevel::High, true)
    } else if last > watch {
        (RiskLevel::Medium, false)
    } else {
        (RiskLevel::Low, false)
    }
}

fn strictly_rising(values: &[f64; WINDOW]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

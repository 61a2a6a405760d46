//! Descriptive analysis of operational history.
//!
//! Computes, per instrumented sensor channel, a summary of the recorded
//! series, IQR anomalies, a smoothed trend, and pairwise correlations
//! between channels. Purely descriptive; the prediction path does not
//! depend on anything here.

use crate::store::EquipmentStore;
use fc_common::error::{Error, Result};
use fc_common::id::EquipmentId;
use fc_common::record::OperationalReading;
use fc_math::{
    classify_trend, iqr_outliers, pearson, rolling_mean, summarize, Summary, TrendDirection,
};
use serde::Serialize;
use std::sync::Arc;

/// Smoothing window for rolling means.
const ROLLING_WINDOW: usize = 5;

/// Sensor channels analyzed per reading.
const CHANNEL_NAMES: [&str; 4] = ["temperature", "vibration", "noise_level", "consumption"];

fn channel_value(reading: &OperationalReading, channel: &str) -> Option<f64> {
    match channel {
        "temperature" => reading.temperature,
        "vibration" => reading.vibration,
        "noise_level" => reading.noise_level,
        "consumption" => reading.consumption,
        _ => None,
    }
}

/// Analysis of one sensor channel's recorded series.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelReport {
    pub channel: String,

    pub summary: Summary,

    /// Indices into the date-sorted reading list whose value fell outside
    /// the IQR fences.
    pub anomaly_indices: Vec<usize>,

    /// Rolling means over full windows, oldest first. Empty when the
    /// series is shorter than the window.
    pub rolling_mean: Vec<f64>,

    pub trend: TrendDirection,
}

/// Pearson correlation between two channels, over readings carrying both.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    pub first: String,
    pub second: String,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub equipment_id: EquipmentId,

    pub reading_count: usize,

    /// One entry per channel with at least one recorded value.
    pub channels: Vec<ChannelReport>,

    /// Computable channel pairs only; pairs with fewer than two shared
    /// readings or no variance are omitted.
    pub correlations: Vec<CorrelationEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Analyze a reading history. Empty history yields an empty report with
/// an explanatory message rather than an error.
pub fn analyze_readings(
    equipment_id: &EquipmentId,
    readings: &[OperationalReading],
) -> AnalysisReport {
    if readings.is_empty() {
        return AnalysisReport {
            equipment_id: equipment_id.clone(),
            reading_count: 0,
            channels: Vec::new(),
            correlations: Vec::new(),
            message: Some("no operational data recorded".to_string()),
        };
    }

    let mut ordered: Vec<&OperationalReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let mut channels = Vec::new();
    for name in CHANNEL_NAMES {
        // Packed series plus the sorted-reading index of each sample, so
        // anomaly indices survive gaps in partially instrumented data.
        let mut positions = Vec::new();
        let mut values = Vec::new();
        for (index, reading) in ordered.iter().enumerate() {
            if let Some(value) = channel_value(reading, name) {
                positions.push(index);
                values.push(value);
            }
        }

        let summary = match summarize(&values) {
            Some(s) => s,
            None => continue,
        };
        let anomaly_indices = iqr_outliers(&values)
            .map(|scan| scan.indices.iter().map(|&i| positions[i]).collect())
            .unwrap_or_default();

        channels.push(ChannelReport {
            channel: name.to_string(),
            summary,
            anomaly_indices,
            rolling_mean: rolling_mean(&values, ROLLING_WINDOW),
            trend: classify_trend(&values),
        });
    }

    let mut correlations = Vec::new();
    for (i, first) in CHANNEL_NAMES.iter().enumerate() {
        for second in &CHANNEL_NAMES[i + 1..] {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for reading in &ordered {
                if let (Some(x), Some(y)) =
                    (channel_value(reading, first), channel_value(reading, second))
                {
                    xs.push(x);
                    ys.push(y);
                }
            }
            if let Some(coefficient) = pearson(&xs, &ys) {
                correlations.push(CorrelationEntry {
                    first: first.to_string(),
                    second: second.to_string(),
                    coefficient,
                });
            }
        }
    }

    AnalysisReport {
        equipment_id: equipment_id.clone(),
        reading_count: readings.len(),
        channels,
        correlations,
        message: None,
    }
}

/// Store-backed front end for [`analyze_readings`].
#[derive(Clone)]
pub struct OperationalAnalyzer {
    store: Arc<dyn EquipmentStore>,
}

impl OperationalAnalyzer {
    pub fn new(store: Arc<dyn EquipmentStore>) -> Self {
        OperationalAnalyzer { store }
    }

    pub async fn analyze(&self, id: &EquipmentId) -> Result<AnalysisReport> {
        let record = self
            .store
            .get_equipment(id)
            .await?
            .ok_or_else(|| Error::EquipmentNotFound { id: id.clone() })?;

        let report = analyze_readings(&record.id, &record.operational_data);
        tracing::debug!(
            equipment_id = %record.id,
            readings = report.reading_count,
            channels = report.channels.len(),
            "operational analysis complete"
        );
        Ok(report)
    }
}

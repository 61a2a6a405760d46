//! Learned failure-model capability.
//!
//! Trained classifiers live outside this crate; the engine only needs two
//! narrow seams: a per-row class-probability function and a category-keyed
//! registry handing out shared handles. Providers are read-mostly and the
//! handles they return are treated as immutable once loaded, so lookups
//! are plain `&self` calls with no locking on the hot path.

use fc_common::record::OperationalReading;
use std::collections::HashMap;
use std::sync::Arc;

/// Model category used when equipment has no category of its own.
pub const GENERAL_CATEGORY: &str = "general";

/// Number of feature columns per reading.
pub const FEATURE_COUNT: usize = 5;

/// Feature vector extracted from one operational reading:
/// `[hours_used, temperature, vibration, noise_level, cycles]`.
/// Channels the equipment is not instrumented for contribute 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingFeatures(pub [f64; FEATURE_COUNT]);

impl ReadingFeatures {
    pub fn from_reading(reading: &OperationalReading) -> Self {
        ReadingFeatures([
            reading.hours_used,
            reading.temperature.unwrap_or(0.0),
            reading.vibration.unwrap_or(0.0),
            reading.noise_level.unwrap_or(0.0),
            reading.cycles.map(f64::from).unwrap_or(0.0),
        ])
    }
}

/// Column-wise z-score standardization over a batch of feature rows,
/// matching how the models were trained. Uses the population standard
/// deviation; zero-variance columns pass through unchanged.
pub fn standardize(rows: &mut [ReadingFeatures]) {
    if rows.is_empty() {
        return;
    }
    let n = rows.len() as f64;
    for col in 0..FEATURE_COUNT {
        let mean = rows.iter().map(|r| r.0[col]).sum::<f64>() / n;
        let variance = rows.iter().map(|r| (r.0[col] - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        if std_dev > 0.0 {
            for row in rows.iter_mut() {
                row.0[col] = (row.0[col] - mean) / std_dev;
            }
        }
    }
}

/// Per-row class probabilities from a trained failure model.
pub trait FailureClassifier: Send + Sync {
    /// One `[p_no_failure, p_failure]` pair per input row, same order.
    fn predict_proba(&self, features: &[ReadingFeatures]) -> Vec<[f64; 2]>;
}

/// Category-keyed registry of trained classifiers.
pub trait ClassifierProvider: Send + Sync {
    /// Shared handle for the equipment family, or `None` when no model was
    /// trained for it. Callers fall back to a neutral estimate on `None`.
    fn classifier_for(&self, category: &str) -> Option<Arc<dyn FailureClassifier>>;
}

/// Classifier that knows nothing: every row gets even odds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralClassifier;

impl FailureClassifier for NeutralClassifier {
    fn predict_proba(&self, features: &[ReadingFeatures]) -> Vec<[f64; 2]> {
        vec![[0.5, 0.5]; features.len()]
    }
}

/// Provider with no models at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModels;

impl ClassifierProvider for NoModels {
    fn classifier_for(&self, _category: &str) -> Option<Arc<dyn FailureClassifier>> {
        None
    }
}

/// Fixed category-to-classifier map, for embedders that load their models
/// ahead of time and for tests.
#[derive(Default)]
pub struct StaticProvider {
    models: HashMap<String, Arc<dyn FailureClassifier>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(
        mut self,
        category: impl Into<String>,
        model: Arc<dyn FailureClassifier>,
    ) -> Self {
        self.models.insert(category.into(), model);
        self
    }
}

impl ClassifierProvider for StaticProvider {
    fn classifier_for(&self, category: &str) -> Option<Arc<dyn FailureClassifier>> {
        self.models.get(category).cloned()
    }
}

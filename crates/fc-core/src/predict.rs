//! Failure prediction orchestration.
//!
//! One prediction walks the whole pipeline: fetch the equipment record,
//! compute MTBF and failure rate, estimate failure probability twice
//! (learned model over recent readings, Weibull over failure history),
//! blend the two, score the risk with the component analysis, then ask
//! the advisory generator to enrich the result. Thin evidence anywhere
//! degrades to documented neutral values; only an unknown equipment id,
//! an unreachable store, or an unreachable generator fails the request.

use crate::classifier::{standardize, ClassifierProvider, ReadingFeatures, GENERAL_CATEGORY};
use crate::generator::{AdvisoryReply, RecommendationGenerator};
use crate::risk::{assess_components, risk_score, ComponentRisk};
use crate::store::EquipmentStore;
use chrono::{DateTime, Utc};
use fc_common::error::{Error, Result};
use fc_common::id::EquipmentId;
use fc_common::record::{EquipmentRecord, OperationalReading};
use fc_config::params::EngineConfig;
use serde::Serialize;
use std::sync::Arc;

/// Advisory text when the generator answered but named no action.
const NO_ACTION_FALLBACK: &str = "No specific action recommended by the advisory model.";

/// Advisory text when the generator's reply could not be parsed.
const UNPARSEABLE_REPLY_FALLBACK: &str =
    "Could not obtain a detailed recommendation from the advisory model.";

/// Complete prediction output. Computed on demand, never persisted.
///
/// Serialize-only: `failure_rate` carries the +infinity sentinel when
/// MTBF is zero, which serde_json renders as `null`, so a snapshot can
/// round-trip through JSON output without leaking a raw infinity.
#[derive(Debug, Clone, Serialize)]
pub struct ReliabilitySnapshot {
    pub equipment_id: EquipmentId,

    pub generated_at: DateTime<Utc>,

    /// Horizon the probabilities refer to.
    pub horizon_days: u32,

    /// Mean time between failures in operating hours.
    pub mtbf: f64,

    /// Failures per operating hour; +infinity when MTBF is zero.
    pub failure_rate: f64,

    pub ml_probability: f64,

    pub weibull_probability: f64,

    /// Blend of the two estimates, in [0, 1].
    pub combined_probability: f64,

    /// Fixed reported confidence; estimation uncertainty is not modeled.
    pub confidence: f64,

    pub risk_score: f64,

    pub components_at_risk: Vec<ComponentRisk>,

    /// Days until the projected failure, at least 1. The advisory
    /// generator may override the locally computed value.
    pub predicted_days_to_failure: i64,

    pub recommended_action: String,
}

#[derive(Debug, Clone, Copy)]
struct MlEstimate {
    probability: f64,
    predicted_days: i64,
}

impl MlEstimate {
    fn from_probability(probability: f64, days_ahead: u32) -> Self {
        MlEstimate { probability, predicted_days: days_until_failure(days_ahead, probability) }
    }
}

/// Store-, classifier-, and generator-backed prediction engine. Cheap to
/// clone; every request is stateless.
#[derive(Clone)]
pub struct FailurePredictor {
    store: Arc<dyn EquipmentStore>,
    classifiers: Arc<dyn ClassifierProvider>,
    generator: Arc<dyn RecommendationGenerator>,
    config: EngineConfig,
}

impl FailurePredictor {
    pub fn new(
        store: Arc<dyn EquipmentStore>,
        classifiers: Arc<dyn ClassifierProvider>,
        generator: Arc<dyn RecommendationGenerator>,
        config: EngineConfig,
    ) -> Self {
        FailurePredictor { store, classifiers, generator, config }
    }

    /// Predict with the configured default horizon.
    pub async fn predict_default(&self, id: &EquipmentId) -> Result<ReliabilitySnapshot> {
        self.predict(id, self.config.prediction.default_horizon_days).await
    }

    /// Predict the failure outlook over the next `days_ahead` days.
    pub async fn predict(&self, id: &EquipmentId, days_ahead: u32) -> Result<ReliabilitySnapshot> {
        if days_ahead == 0 {
            return Err(Error::InvalidHorizon { days: days_ahead });
        }

        let record = self
            .store
            .get_equipment(id)
            .await?
            .ok_or_else(|| Error::EquipmentNotFound { id: id.clone() })?;

        let mtbf = fc_math::mtbf(record.failure_history.len(), record.total_usage_hours);
        let failure_rate = fc_math::failure_rate(mtbf);

        let ml = self.ml_estimate(&record, days_ahead);
        let weibull_probability = self.weibull_probability(&record, days_ahead);

        let blend = self.config.prediction.ml_blend_weight;
        let combined_probability =
            (blend * ml.probability + (1.0 - blend) * weibull_probability).clamp(0.0, 1.0);
        tracing::debug!(
            equipment_id = %record.id,
            ml_probability = ml.probability,
            ml_days = ml.predicted_days,
            weibull_probability,
            combined_probability,
            "estimates blended"
        );

        let components_at_risk = assess_components(&record.components, &self.config.thresholds);
        let score = risk_score(combined_probability, &components_at_risk, &self.config.scoring);

        let computed_days = days_until_failure(days_ahead, combined_probability);

        let prompt =
            advisory_prompt(&record, combined_probability, mtbf, failure_rate, &components_at_risk);
        let reply_text = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(equipment_id = %record.id, error = %e, "advisory generator unreachable");
            Error::GeneratorUnavailable(e.to_string())
        })?;

        let (predicted_days_to_failure, recommended_action) =
            match AdvisoryReply::parse(&reply_text) {
                Some(reply) => (
                    reply.predicted_failure_days.unwrap_or(computed_days),
                    reply.recommended_action.unwrap_or_else(|| NO_ACTION_FALLBACK.to_string()),
                ),
                None => {
                    tracing::warn!(
                        equipment_id = %record.id,
                        "advisory reply is not a JSON object, keeping computed values"
                    );
                    (computed_days, UNPARSEABLE_REPLY_FALLBACK.to_string())
                }
            };

        let snapshot = ReliabilitySnapshot {
            equipment_id: record.id.clone(),
            generated_at: Utc::now(),
            horizon_days: days_ahead,
            mtbf,
            failure_rate,
            ml_probability: ml.probability,
            weibull_probability,
            combined_probability,
            confidence: self.config.prediction.static_confidence,
            risk_score: score,
            components_at_risk,
            predicted_days_to_failure,
            recommended_action,
        };

        tracing::info!(
            equipment_id = %snapshot.equipment_id,
            combined_probability = snapshot.combined_probability,
            risk_score = snapshot.risk_score,
            predicted_days_to_failure = snapshot.predicted_days_to_failure,
            horizon_days = days_ahead,
            "failure prediction complete"
        );
        Ok(snapshot)
    }

    /// Learned-model estimate over the reading history.
    ///
    /// Too few readings, no classifier for the category, or degenerate
    /// classifier output all degrade to the neutral probability.
    fn ml_estimate(&self, record: &EquipmentRecord, days_ahead: u32) -> MlEstimate {
        let params = &self.config.prediction;

        if record.operational_data.len() < params.min_readings_for_model {
            tracing::debug!(
                equipment_id = %record.id,
                readings = record.operational_data.len(),
                needed = params.min_readings_for_model,
                "too few readings for the learned model, using the neutral estimate"
            );
            return MlEstimate::from_probability(params.neutral_probability, days_ahead);
        }

        let category = record.category.as_deref().unwrap_or(GENERAL_CATEGORY);
        let classifier = match self.classifiers.classifier_for(category) {
            Some(classifier) => classifier,
            None => {
                tracing::debug!(
                    equipment_id = %record.id,
                    category,
                    "no classifier for this category, using the neutral estimate"
                );
                return MlEstimate::from_probability(params.neutral_probability, days_ahead);
            }
        };

        // Models read the history oldest first; the last row is the
        // present state.
        let mut ordered: Vec<&OperationalReading> = record.operational_data.iter().collect();
        ordered.sort_by_key(|r| r.date);
        let mut rows: Vec<ReadingFeatures> =
            ordered.iter().map(|r| ReadingFeatures::from_reading(r)).collect();
        standardize(&mut rows);

        let proba = classifier.predict_proba(&rows);
        let probability = match proba.last() {
            Some(row) if row[1].is_finite() => row[1].clamp(0.0, 1.0),
            Some(_) => {
                tracing::warn!(
                    equipment_id = %record.id,
                    category,
                    "classifier produced a non-finite probability, using the neutral estimate"
                );
                params.neutral_probability
            }
            None => {
                tracing::warn!(
                    equipment_id = %record.id,
                    category,
                    "classifier returned no rows, using the neutral estimate"
                );
                params.neutral_probability
            }
        };

        MlEstimate::from_probability(probability, days_ahead)
    }

    /// Weibull estimate over the failure history, or 0 when there is not
    /// enough of one. Evaluated at the projected odometer assuming
    /// continuous operation across the horizon.
    fn weibull_probability(&self, record: &EquipmentRecord, days_ahead: u32) -> f64 {
        let params = &self.config.prediction;

        if record.failure_history.len() < params.min_failures_for_weibull {
            return 0.0;
        }
        let times = record.failure_hours();
        if times.is_empty() {
            return 0.0;
        }

        let fallback = &self.config.weibull_fallback;
        let fit = fc_math::fit_weibull_with_fallback(&times, fallback.scale, fallback.shape);
        tracing::debug!(
            equipment_id = %record.id,
            samples = times.len(),
            scale = fit.scale,
            shape = fit.shape,
            fallback = fit.fallback,
            "weibull parameters"
        );

        let horizon_hours = record.total_usage_hours + f64::from(days_ahead) * params.hours_per_day;
        fc_math::weibull_cdf(horizon_hours, fit.scale, fit.shape)
    }
}

/// Days until the projected failure: the remaining fraction of the
/// horizon, never under one day.
fn days_until_failure(days_ahead: u32, probability: f64) -> i64 {
    let days = (f64::from(days_ahead) * (1.0 - probability)).round() as i64;
    days.max(1)
}

fn advisory_prompt(
    record: &EquipmentRecord,
    combined_probability: f64,
    mtbf: f64,
    failure_rate: f64,
    components_at_risk: &[ComponentRisk],
) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are a maintenance advisor for industrial equipment.\n");
    prompt.push_str(&format!("Equipment: {} (id {})\n", record.name, record.id));
    prompt.push_str(&format!("Estimated failure probability: {:.2}\n", combined_probability));
    prompt.push_str(&format!("MTBF: {:.2} hours\n", mtbf));
    prompt.push_str(&format!("Failure rate: {:.4} failures/hour\n", failure_rate));

    if components_at_risk.is_empty() {
        prompt.push_str("Components at risk: none\n");
    } else {
        prompt.push_str("Components at risk:\n");
        for component in components_at_risk {
            prompt.push_str(&format!(
                "- {} ({} risk, health {:.0}%, remaining life {:.0}%)\n",
                component.name,
                component.risk_level,
                component.health_percentage,
                component.remaining_life_percentage,
            ));
        }
    }

    prompt.push_str(
        "\nAnswer with a single JSON object containing \
         \"predicted_failure_days\" (integer days until the next likely failure) and \
         \"recommended_action\" (one concise maintenance recommendation).",
    );
    prompt
}

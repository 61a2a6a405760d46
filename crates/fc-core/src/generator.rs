//! External advisory text generator.
//!
//! The predictor asks a text-generation endpoint (Ollama-compatible) for a
//! maintenance advisory after computing its own numbers. Failing to REACH
//! the endpoint fails the prediction; a reply that reaches us but cannot
//! be parsed does not, the predictor falls back to its computed values.
//! That split, transport fatal and content recoverable, is the contract
//! every implementation of [`RecommendationGenerator`] must keep.

use async_trait::async_trait;
use fc_config::params::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Communication failures talking to the generation endpoint. All of
/// these are fatal to the surrounding prediction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("endpoint returned HTTP {code}")]
    Status { code: u16 },
}

/// Produces advisory text for a prompt.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// HTTP client for an Ollama-style `/api/generate` endpoint.
///
/// The whole request, connect through body, runs under the configured
/// timeout. A timeout is reported as its own variant but handled exactly
/// like any other transport failure.
pub struct HttpGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;
        Ok(HttpGenerator { client, config })
    }
}

#[async_trait]
impl RecommendationGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout { seconds: self.config.timeout_secs }
                } else {
                    GeneratorError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status { code: status.as_u16() });
        }

        // A broken response envelope counts as transport trouble; only the
        // generated text inside is allowed to be malformed.
        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;
        Ok(parsed.response)
    }
}

/// Test double replaying a fixed sequence of outcomes and recording the
/// prompts it was asked.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GeneratorError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn with_reply(text: impl Into<String>) -> Self {
        Self::with_outcomes(vec![Ok(text.into())])
    }

    pub fn failing(error: GeneratorError) -> Self {
        Self::with_outcomes(vec![Err(error)])
    }

    pub fn with_outcomes(outcomes: Vec<Result<String, GeneratorError>>) -> Self {
        ScriptedGenerator {
            replies: Mutex::new(outcomes.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        match self.prompts.lock() {
            Ok(prompts) => prompts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl RecommendationGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let next = match self.replies.lock() {
            Ok(mut replies) => replies.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        next.unwrap_or_else(|| {
            Err(GeneratorError::Transport("script exhausted".to_string()))
        })
    }
}

/// Structured advisory extracted from generated text.
///
/// The model is asked for a single JSON object; models being models, any
/// field may be missing, mistyped, or the whole reply may be prose.
/// `parse` returns `None` when no JSON object parses at all, and leaves
/// individual fields `None` when they are absent or the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryReply {
    pub predicted_failure_days: Option<i64>,
    pub recommended_action: Option<String>,
}

impl AdvisoryReply {
    pub fn parse(text: &str) -> Option<AdvisoryReply> {
        let value: serde_json::Value = serde_json::from_str(text.trim()).ok()?;
        let object = value.as_object()?;
        Some(AdvisoryReply {
            predicted_failure_days: object
                .get("predicted_failure_days")
                .and_then(|v| v.as_i64()),
            recommended_action: object
                .get("recommended_action")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        })
    }
}

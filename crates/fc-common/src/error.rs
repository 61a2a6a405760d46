//! Error types for the failcast engine.
//!
//! The engine distinguishes *absent evidence* from *failure*: thin history
//! (too few readings, too few failures) is never an error, it degrades the
//! analysis to neutral estimates instead. Errors here are reserved for
//! conditions the caller must handle: unknown equipment, an unreachable
//! store or advisory generator, or invalid request parameters.
//!
//! Each error carries:
//! - a category for grouping and log filtering
//! - an HTTP status for service frontends that surface engine results
//! - a recoverability hint for retry logic

use crate::id::EquipmentId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for failcast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Engine configuration errors (thresholds, weights, presets).
    Config,
    /// Request validation errors (bad horizon, malformed input).
    Validation,
    /// Record lookup and persistence errors.
    Store,
    /// Advisory text-generator integration errors.
    Generator,
    /// Internal invariant violations and serialization failures.
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Store => write!(f, "store"),
            ErrorCategory::Generator => write!(f, "generator"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

/// Unified error type for the failcast engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("prediction horizon must be at least one day, got {days}")]
    InvalidHorizon { days: u32 },

    #[error("equipment {id} not found")]
    EquipmentNotFound { id: EquipmentId },

    #[error("equipment store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("recommendation generator unavailable: {0}")]
    GeneratorUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) => ErrorCategory::Config,
            Error::InvalidHorizon { .. } => ErrorCategory::Validation,
            Error::EquipmentNotFound { .. } | Error::StoreUnavailable(_) => ErrorCategory::Store,
            Error::GeneratorUnavailable(_) => ErrorCategory::Generator,
            Error::Internal(_) | Error::Json(_) => ErrorCategory::Internal,
        }
    }

    /// HTTP status a service frontend should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Config(_) => 500,
            Error::InvalidHorizon { .. } => 422,
            Error::EquipmentNotFound { .. } => 404,
            Error::StoreUnavailable(_) => 503,
            Error::GeneratorUnavailable(_) => 502,
            Error::Internal(_) => 500,
            Error::Json(_) => 500,
        }
    }

    /// Returns whether retrying the same request later may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Fixing config or the request is on the caller, not the clock.
            Error::Config(_) => false,
            Error::InvalidHorizon { .. } => false,
            Error::EquipmentNotFound { .. } => false,

            // Collaborator outages are transient.
            Error::StoreUnavailable(_) => true,
            Error::GeneratorUnavailable(_) => true,

            Error::Internal(_) => false,
            Error::Json(_) => false,
        }
    }
}

/// Structured error body for machine-parseable reporting.
///
/// Service frontends embed this in their error responses so clients can
/// branch on category and recoverability without parsing messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// HTTP status the error maps to.
    pub status: u16,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether retrying later may succeed.
    pub recoverable: bool,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            status: err.http_status(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"status":{},"error":"serialization_failed"}}"#, self.status)
        })
    }
}

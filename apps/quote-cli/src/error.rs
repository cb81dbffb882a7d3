//! # App Error Type
//!
//! Unified error type for quote commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigError ───────────────┐                                          │
//! │                             │                                          │
//! │  CoreError ─────────────────┼──► AppError { code, message } ──► stderr │
//! │                             │                          │               │
//! │  ValidationError ───────────┘                          ▼               │
//! │                                              ErrorCode::exit_code()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use driverhire_core::{CoreError, ValidationError};
use serde::Serialize;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// With `--json`, failures print as:
/// ```json
/// {
///   "code": "PRICING_UNAVAILABLE",
///   "message": "Pricing unavailable: no price category named 'premium'"
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes, each with its own process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad booking input (strict mode)
    ValidationError,

    /// Configuration could not be loaded or is invalid
    ConfigError,

    /// No price category matched; no breakdown exists
    PricingUnavailable,

    /// Output could not be produced
    Internal,
}

impl ErrorCode {
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::PricingUnavailable => 2,
            ErrorCode::ValidationError => 3,
            ErrorCode::ConfigError => 4,
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn pricing_unavailable(category: &str) -> Self {
        AppError::new(
            ErrorCode::PricingUnavailable,
            format!("Pricing unavailable: no price category named '{}'", category),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CategoryNotFound(category) => AppError::pricing_unavailable(&category),
            other => AppError::new(ErrorCode::ValidationError, other.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("Failed to serialize output: {}", err))
    }
}

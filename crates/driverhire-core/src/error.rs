//! # Error Types
//!
//! Domain-specific error types for driverhire-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  driverhire-core errors (this file)                                    │
//! │  ├── CoreError        - Booking submission failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  ├── ConfigError      - Bad configuration                              │
//! │  └── AppError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The usage resolver and the cost calculator never fail. Garbage usage
//! text becomes `0`, and a missing price category means "no breakdown"
//! (`None`), not an error. Only the strict submission path below uses
//! these types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking-level errors raised when a draft is checked for submission.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No price category matches the selected label.
    ///
    /// ## When This Occurs
    /// - The price table was fetched but has no record with this exact name
    /// - The label differs only by case ("premium" vs "Premium")
    #[error("Price category not found: {0}")]
    CategoryNotFound(String),

    /// The draft has no usage applied yet.
    #[error("Usage has not been selected")]
    UsageMissing,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur at the boundary (booking submission, config loading), never
/// inside the pure calculator.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., "abc" in a numeric field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

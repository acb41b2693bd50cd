//! Error types for the Charge-Rate Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while deriving a charge rate or
//! loading rate templates.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Charge-Rate Cost Engine.
///
/// `InvalidConfiguration` and `NonPositiveBillableHours` describe inputs the
/// user can correct; the remaining variants are system-side failures.
///
/// # Example
///
/// ```
/// use charge_rate_engine::error::EngineError;
///
/// let error = EngineError::InvalidConfiguration {
///     field: "cost.super_rate".to_string(),
///     message: "must be between 0 and 1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid configuration field 'cost.super_rate': must be between 0 and 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input value was outside its permitted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The offending field, qualified by its configuration group.
        field: String,
        /// A description of the permitted range.
        message: String,
    },

    /// The excluded categories consume all of the working year.
    #[error(
        "Billable hours would be {billable_hours}: {unbilled_weeks} unbilled weeks \
         (excluded: {}) leave nothing of {weeks_per_year} weeks per year",
        .excluded.join(", ")
    )]
    NonPositiveBillableHours {
        /// The billable hours the work pattern would produce.
        billable_hours: Decimal,
        /// Total unbilled weeks derived from the excluded categories.
        unbilled_weeks: Decimal,
        /// The configured working weeks per year.
        weeks_per_year: Decimal,
        /// The categories excluded from billable time.
        excluded: Vec<String>,
    },

    /// A derivation exceeded the representable range of a decimal value.
    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow {
        /// The derivation that overflowed.
        operation: String,
    },

    /// Template file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Template file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate template was loaded under the requested code.
    #[error("Rate template not found: {code}")]
    TemplateNotFound {
        /// The template code that was not found.
        code: String,
    },
}

impl EngineError {
    /// Builds an `InvalidConfiguration` error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an `ArithmeticOverflow` error.
    pub fn overflow(operation: impl Into<String>) -> Self {
        EngineError::ArithmeticOverflow {
            operation: operation.into(),
        }
    }

    /// Returns true if the error stems from input the user can correct.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidConfiguration { .. } | EngineError::NonPositiveBillableHours { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

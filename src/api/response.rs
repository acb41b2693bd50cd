//! Response types for the Charge-Rate Cost Engine API.
//!
//! This module defines the success envelopes, the error response structures
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{AuditedCalculation, BatchOutcome};
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult};

/// Response body for a successful `/charge-rate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRateResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// Identifier echoed from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apprentice_id: Option<String>,
    /// Code of the rate template the request was resolved against.
    pub template: String,
    /// The calculated figures.
    pub result: CalculationResult,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

impl ChargeRateResponse {
    /// Wraps an audited calculation in a response envelope.
    pub fn new(
        apprentice_id: Option<String>,
        template: String,
        calculation: AuditedCalculation,
    ) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            apprentice_id,
            template,
            result: calculation.result,
            audit_trace: calculation.audit_trace,
        }
    }
}

/// Whether a batch item succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchItemStatus {
    /// The item produced a result.
    Ok,
    /// The item produced an error.
    Error,
}

/// The outcome of one batch item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemResponse {
    /// Identifier of the apprentice this outcome belongs to.
    pub apprentice_id: String,
    /// Whether the item succeeded.
    pub status: BatchItemStatus,
    /// The result, present when `status` is `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    /// The error, present when `status` is `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl From<BatchOutcome> for BatchItemResponse {
    fn from(outcome: BatchOutcome) -> Self {
        match outcome.outcome {
            Ok(result) => Self {
                apprentice_id: outcome.apprentice_id,
                status: BatchItemStatus::Ok,
                result: Some(result),
                error: None,
            },
            Err(err) => Self {
                apprentice_id: outcome.apprentice_id,
                status: BatchItemStatus::Error,
                result: None,
                error: Some(ApiErrorResponse::from(err).error),
            },
        }
    }
}

/// Response body for the `/charge-rate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// One entry per request item, in request order.
    pub results: Vec<BatchItemResponse>,
    /// Number of items that produced a result.
    pub succeeded: usize,
    /// Number of items that produced an error.
    pub failed: usize,
}

impl From<Vec<BatchOutcome>> for BatchResponse {
    fn from(outcomes: Vec<BatchOutcome>) -> Self {
        let results: Vec<BatchItemResponse> = outcomes.into_iter().map(Into::into).collect();
        let succeeded = results
            .iter()
            .filter(|r| r.status == BatchItemStatus::Ok)
            .count();
        let failed = results.len() - succeeded;
        Self {
            results,
            succeeded,
            failed,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a template not found error response.
    pub fn template_not_found(code: &str) -> Self {
        Self::with_details(
            "TEMPLATE_NOT_FOUND",
            format!("Rate template not found: {}", code),
            format!("No rate template with code '{}' is loaded", code),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidConfiguration { field, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_CONFIGURATION",
                    message,
                    format!("Correct the value of '{}' and retry", field),
                ),
            },
            EngineError::NonPositiveBillableHours { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NON_POSITIVE_BILLABLE_HOURS",
                    message,
                    "Bill more leave categories to the host or reduce unbilled time",
                ),
            },
            EngineError::ArithmeticOverflow { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("ARITHMETIC_OVERFLOW", message),
            },
            EngineError::TemplateNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::template_not_found(&code),
            },
            EngineError::ConfigNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    message,
                ),
            },
        }
    }
}

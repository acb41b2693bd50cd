//! HTTP request handlers for the Charge-Rate Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{BatchItem, BatchOutcome, calculate_batch, calculate_with_audit};

use super::request::{BatchRequest, ChargeRateRequest};
use super::response::{ApiError, ApiErrorResponse, BatchResponse, ChargeRateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/charge-rate", post(charge_rate_handler))
        .route("/charge-rate/batch", post(batch_handler))
        .route("/templates", get(list_templates_handler))
        .route("/templates/:code", get(get_template_handler))
        .with_state(state)
}

/// Handler for POST /charge-rate endpoint.
///
/// Resolves the request against its template and returns the charge rate
/// together with its audit trace.
async fn charge_rate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChargeRateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing charge rate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let start_time = Instant::now();
    let calculation = request
        .resolve(state.config())
        .and_then(|(template, input)| {
            calculate_with_audit(&input).map(|audited| (template, audited))
        });

    match calculation {
        Ok((template, audited)) => {
            info!(
                correlation_id = %correlation_id,
                apprentice_id = request.apprentice_id.as_deref().unwrap_or("-"),
                template = %template,
                charge_rate = %audited.result.charge_rate,
                duration_us = start_time.elapsed().as_micros(),
                "Charge rate calculated"
            );
            json_response(
                StatusCode::OK,
                ChargeRateResponse::new(request.apprentice_id, template, audited),
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Charge rate calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /charge-rate/batch endpoint.
///
/// Each item is resolved and calculated independently. Items without an
/// `apprentice_id` are reported as `item_<n>` (1-based).
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let start_time = Instant::now();
    let mut items = Vec::with_capacity(request.items.len());
    let mut unresolved: Vec<Option<BatchOutcome>> = Vec::with_capacity(request.items.len());

    for (index, item) in request.items.iter().enumerate() {
        let apprentice_id = item
            .apprentice_id
            .clone()
            .unwrap_or_else(|| format!("item_{}", index + 1));
        match item.resolve(state.config()) {
            Ok((_, input)) => {
                items.push(BatchItem {
                    apprentice_id,
                    input,
                });
                unresolved.push(None);
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    apprentice_id = %apprentice_id,
                    error = %err,
                    "Batch item could not be resolved"
                );
                unresolved.push(Some(BatchOutcome {
                    apprentice_id,
                    outcome: Err(err),
                }));
            }
        }
    }

    let mut calculated = calculate_batch(&items).into_iter();
    let outcomes: Vec<BatchOutcome> = unresolved
        .into_iter()
        .filter_map(|slot| slot.or_else(|| calculated.next()))
        .collect();

    let response = BatchResponse::from(outcomes);
    info!(
        correlation_id = %correlation_id,
        items = response.results.len(),
        succeeded = response.succeeded,
        failed = response.failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch request completed"
    );
    json_response(StatusCode::OK, response)
}

/// Listing returned by GET /templates.
#[derive(Serialize)]
struct TemplateList {
    templates: Vec<crate::config::TemplateSummary>,
}

/// Handler for GET /templates endpoint.
async fn list_templates_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        TemplateList {
            templates: state.config().summaries(),
        },
    )
}

/// Handler for GET /templates/:code endpoint.
async fn get_template_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    match state.config().get_template(&code) {
        Ok(template) => json_response(StatusCode::OK, template),
        Err(err) => {
            warn!(template = %code, "Rate template not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Converts a JSON extraction failure into an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message, e.g. "missing field `pay_rate`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn bad_request(error: ApiError) -> Response {
    json_response(StatusCode::BAD_REQUEST, error)
}

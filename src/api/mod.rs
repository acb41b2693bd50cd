//! HTTP API module for the Charge-Rate Cost Engine.
//!
//! This module provides the REST API endpoints for pricing apprentices,
//! singly or in batches, and for inspecting the loaded rate templates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, ChargeRateRequest};
pub use response::{
    ApiError, ApiErrorResponse, BatchItemResponse, BatchItemStatus, BatchResponse,
    ChargeRateResponse,
};
pub use state::AppState;

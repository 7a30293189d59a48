//! HTTP request handlers for the Freight Quote Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::quote::build_quote;

use super::request::{ListQuotesParams, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/quotes", get(list_quotes_handler).post(create_quote_handler))
        .route("/quotes/:quote_id", get(get_quote_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tariff_version: state.config().tariff().version.clone(),
        },
    )
}

/// Handler for POST /quotes.
///
/// Prices the shipment, stores the quote and returns it with 201.
async fn create_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let details = match request.details() {
        Ok(details) => details,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid shipment details"
            );
            return error_response(err.into());
        }
    };

    let shipment = request.shipment();
    let start_time = Instant::now();
    match build_quote(&shipment, state.config().config(), state.clock().now()) {
        Ok(quote) => {
            let quote = match details {
                Some(details) => quote.with_details(details),
                None => quote,
            };
            info!(
                correlation_id = %correlation_id,
                quote_id = %quote.quote_id,
                origin = %shipment.origin,
                destination = %shipment.destination,
                service_type = %shipment.service_type,
                total = %quote.breakdown.total,
                duration_us = start_time.elapsed().as_micros(),
                "Quote created"
            );
            state.store().insert(quote.clone());
            json_response(StatusCode::CREATED, quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote assembly failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /quotes.
///
/// Lists stored quotes newest first; `?active=true` hides expired ones.
async fn list_quotes_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQuotesParams>,
) -> Response {
    let active_at = params.active.then(|| state.clock().now());
    let quotes = state.store().list(active_at);
    info!(count = quotes.len(), active = params.active, "Listed quotes");
    json_response(StatusCode::OK, quotes)
}

/// Handler for GET /quotes/:quote_id.
async fn get_quote_handler(
    State(state): State<AppState>,
    Path(quote_id): Path<String>,
) -> Response {
    match state.store().get(&quote_id) {
        Ok(quote) => json_response(StatusCode::OK, quote),
        Err(err) => {
            warn!(quote_id = %quote_id, "Quote not found");
            error_response(err.into())
        }
    }
}

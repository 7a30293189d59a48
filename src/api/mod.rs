//! HTTP API module for the Freight Quote Engine.
//!
//! This module provides the REST API endpoints for creating, listing and
//! fetching freight quotes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ListQuotesParams, QuoteRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;

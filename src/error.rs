//! Error types for the Freight Quote Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing and assembling quotes.

use thiserror::Error;

use crate::models::ServiceType;

/// The main error type for the Freight Quote Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use freight_quote_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a tariff invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// The carrier catalog has no templates for a service type.
    #[error("Carrier catalog has no carriers for service type '{service_type}'")]
    EmptyCarrierCatalog {
        /// The service type with an empty catalog.
        service_type: ServiceType,
    },

    /// A weight string had no numeric prefix.
    #[error("Invalid weight '{input}': expected a number followed by an optional unit")]
    InvalidWeight {
        /// The raw weight string.
        input: String,
    },

    /// A dimensions string could not be parsed.
    #[error("Invalid dimensions '{input}': expected LxWxH followed by an optional unit")]
    InvalidDimensions {
        /// The raw dimensions string.
        input: String,
    },

    /// A service type string did not name a known transport mode.
    #[error("Unsupported service type: {value}")]
    UnsupportedServiceType {
        /// The unrecognised value.
        value: String,
    },

    /// No stored quote has the requested identifier.
    #[error("Quote not found: {quote_id}")]
    QuoteNotFound {
        /// The identifier that was looked up.
        quote_id: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

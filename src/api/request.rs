//! Request types for the Freight Quote Engine API.
//!
//! This module defines the JSON request body for `POST /quotes` and the
//! query parameters for `GET /quotes`.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ContactInfo, Dimensions, ServiceType, ShipmentDetails, ShipmentRequest};

/// Request body for the `POST /quotes` endpoint.
///
/// The first five fields are priced. The rest are booking details that are
/// stored with the quote but never change its price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Free-text origin location.
    pub origin: String,
    /// Free-text destination location.
    pub destination: String,
    /// Free-text weight, e.g. "1500 kg".
    pub weight: String,
    /// Requested transport mode.
    pub service_type: ServiceType,
    /// Cargo category, e.g. "general" or "hazardous".
    #[serde(default = "default_cargo_type")]
    pub cargo_type: String,
    /// Package dimensions, e.g. "120x80x100 cm".
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Declared cargo value.
    #[serde(default)]
    pub declared_value: Option<String>,
    /// Incoterms rule.
    #[serde(default)]
    pub incoterms: Option<String>,
    /// Requested urgency.
    #[serde(default)]
    pub urgency: Option<String>,
    /// Extra services requested.
    #[serde(default)]
    pub additional_services: Vec<String>,
    /// Requester contact details.
    #[serde(default)]
    pub contact: Option<ContactInfo>,
}

fn default_cargo_type() -> String {
    "general".to_string()
}

impl QuoteRequest {
    /// Returns the priced part of the request.
    pub fn shipment(&self) -> ShipmentRequest {
        ShipmentRequest::new(
            self.origin.clone(),
            self.destination.clone(),
            self.weight.clone(),
            self.service_type,
            self.cargo_type.clone(),
        )
    }

    /// Returns the booking details, or `None` when none were supplied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` when `dimensions` is present but cannot
    /// be parsed.
    pub fn details(&self) -> EngineResult<Option<ShipmentDetails>> {
        let dimensions = self
            .dimensions
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(Dimensions::parse)
            .transpose()?;

        let details = ShipmentDetails {
            dimensions,
            declared_value: self.declared_value.clone(),
            incoterms: self.incoterms.clone(),
            urgency: self.urgency.clone(),
            additional_services: self.additional_services.clone(),
            contact: self.contact.clone(),
        };

        if details == ShipmentDetails::default() {
            Ok(None)
        } else {
            Ok(Some(details))
        }
    }
}

/// Query parameters for `GET /quotes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuotesParams {
    /// When true, only quotes that have not yet expired are listed.
    #[serde(default)]
    pub active: bool,
}

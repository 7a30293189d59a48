//! Quote record models.
//!
//! This module contains the [`Quote`] type produced by quote assembly and
//! the optional shipment details captured alongside it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CarrierRate, Dimensions, PriceBreakdown, QuoteWarning, ShipmentRequest};

/// Outcome of quote assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Pricing completed and carrier rates are attached.
    Success,
}

/// Contact details of the person requesting a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact name.
    #[serde(default)]
    pub name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Company name.
    #[serde(default)]
    pub company: String,
}

/// Booking details that accompany a quote but do not affect its price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    /// Parsed package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Declared cargo value as entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<String>,
    /// Incoterms rule (e.g. "FOB").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterms: Option<String>,
    /// Requested urgency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    /// Extra services such as insurance or customs clearance.
    #[serde(default)]
    pub additional_services: Vec<String>,
    /// Requester contact details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

/// A priced quote with one rate per catalog carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Time-based identifier, e.g. `QT-1767225600000-9f86d081`.
    pub quote_id: String,
    /// Assembly outcome.
    pub status: QuoteStatus,
    /// The request that was priced.
    pub request: ShipmentRequest,
    /// Baseline price before carrier multipliers.
    pub breakdown: PriceBreakdown,
    /// Estimated transit window.
    pub transit_time: String,
    /// Carrier offers in catalog order.
    pub carrier_rates: Vec<CarrierRate>,
    /// Data-quality warnings raised while pricing.
    #[serde(default)]
    pub warnings: Vec<QuoteWarning>,
    /// Booking details supplied with the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ShipmentDetails>,
    /// When the quote was assembled.
    pub created_at: DateTime<Utc>,
    /// When every carrier offer in this quote lapses.
    pub valid_until: DateTime<Utc>,
    /// The version of the engine that priced the quote.
    pub engine_version: String,
}

impl Quote {
    /// Attaches booking details to the quote.
    pub fn with_details(mut self, details: ShipmentDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Returns true once `now` has reached the quote's expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_until
    }
}

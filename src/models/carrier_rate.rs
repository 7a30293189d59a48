//! Per-carrier rate lines derived from a baseline price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ChargeBreakdown, ServiceType};

/// The price a carrier quotes for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierPrice {
    /// Baseline total scaled by the carrier multiplier, rounded to cents.
    ///
    /// Each charge is rounded independently, so `amount` can differ from the
    /// sum of `breakdown` by a cent or two.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Baseline charges scaled by the carrier multiplier.
    pub breakdown: ChargeBreakdown,
}

/// One carrier's offer for a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRate {
    /// Carrier identifier from the catalog (not unique within a quote).
    pub carrier_id: String,
    /// Carrier display name.
    pub carrier_name: String,
    /// The transport mode quoted.
    pub service_type: ServiceType,
    /// Expected delivery window, e.g. "18-22 days".
    pub transit_time: String,
    /// The quoted price.
    pub price: CarrierPrice,
    /// When this offer lapses. Identical for every rate in a quote.
    pub valid_until: DateTime<Utc>,
}

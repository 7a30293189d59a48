//! Calculation logic for the Freight Quote Engine.
//!
//! This module contains the pure pricing functions: region resolution for
//! free-text locations, lane rate lookup, baseline price calculation,
//! transit-time estimation and the carrier fan-out that turns one baseline
//! price into a rate line per catalog carrier.

mod carrier_rates;
mod lane_rate;
mod region;
mod shipping_price;
mod transit_time;

pub use carrier_rates::generate_carrier_rates;
pub use lane_rate::{LaneRateLookupResult, RateSource, lookup_lane_rate};
pub use region::{Movement, classify_movement, resolve_region};
pub use shipping_price::{
    PricingResult, WeightResolution, calculate_shipping_price,
    calculate_shipping_price_with_policy, resolve_weight,
};
pub use transit_time::{estimate_transit_time, transit_range};

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Multiplies two amounts, reporting overflow as a calculation error.
fn checked_product(a: Decimal, b: Decimal, context: &str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| EngineError::CalculationError {
        message: format!("{} overflowed ({} x {})", context, a, b),
    })
}

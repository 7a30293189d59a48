//! Core data models for the Freight Quote Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod carrier_rate;
mod dimensions;
mod price;
mod quote;
mod shipment;
mod warning;
mod weight;

pub use carrier_rate::{CarrierPrice, CarrierRate};
pub use dimensions::{Dimensions, LengthUnit};
pub use price::{ChargeBreakdown, PriceBreakdown, round_currency};
pub use quote::{ContactInfo, Quote, QuoteStatus, ShipmentDetails};
pub use shipment::{ServiceType, ShipmentRequest};
pub use warning::QuoteWarning;
pub use weight::{Weight, WeightUnit};

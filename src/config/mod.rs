//! Configuration loading and management for the Freight Quote Engine.
//!
//! This module provides functionality to load a tariff from YAML files,
//! including regions, lane rates, surcharges, transit ranges and the
//! carrier catalog.
//!
//! # Example
//!
//! ```no_run
//! use freight_quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded tariff: {}", config.tariff().name);
//! ```

mod loader;
mod types;

#[cfg(test)]
pub(crate) use types::test_support;

pub use loader::ConfigLoader;
pub use types::{
    CargoSurcharge, CarrierCatalog, CarrierTemplate, LaneRate, PerService, QuoteConfig, RateTable,
    Region, RegionsConfig, ServiceRates, TariffMetadata, TransitProfile, TransitRange, TransitTable,
    WeightParseMode, WeightPolicy, normalize_cargo_type,
};

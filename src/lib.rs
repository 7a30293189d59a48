//! Freight Quote Engine
//!
//! This crate prices freight shipments: it parses free-text weights,
//! resolves origins and destinations to tariff regions, computes a baseline
//! price and transit estimate, and fans the price out to every carrier in
//! the catalog for the requested service type.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod quote;

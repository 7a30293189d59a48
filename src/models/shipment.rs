//! Shipment request model and related types.
//!
//! This module defines the [`ShipmentRequest`] struct and the [`ServiceType`]
//! enum that selects which rate, transit and carrier tables apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The transport mode of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Ocean freight.
    Sea,
    /// Air freight.
    Air,
    /// Road or rail freight.
    Ground,
}

impl ServiceType {
    /// Every service type, in catalog order.
    pub const ALL: [ServiceType; 3] = [ServiceType::Sea, ServiceType::Air, ServiceType::Ground];

    /// Returns the lowercase name used in configuration and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Sea => "sea",
            ServiceType::Air => "air",
            ServiceType::Ground => "ground",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = EngineError;

    /// Parses a service type, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use freight_quote_engine::models::ServiceType;
    ///
    /// assert_eq!(" Air ".parse::<ServiceType>().unwrap(), ServiceType::Air);
    /// assert!("rocket".parse::<ServiceType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sea" => Ok(ServiceType::Sea),
            "air" => Ok(ServiceType::Air),
            "ground" => Ok(ServiceType::Ground),
            _ => Err(EngineError::UnsupportedServiceType {
                value: s.to_string(),
            }),
        }
    }
}

/// A request to price a shipment.
///
/// Field presence is validated by the caller. The engine only interprets
/// the weight string, which combines a number and a unit (e.g. `"1500 kg"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Free-text origin (city, port or country).
    pub origin: String,
    /// Free-text destination (city, port or country).
    pub destination: String,
    /// Weight as entered, number plus optional unit.
    pub weight: String,
    /// The transport mode.
    pub service_type: ServiceType,
    /// Cargo category (e.g. "general", "hazardous").
    pub cargo_type: String,
}

impl ShipmentRequest {
    /// Creates a new shipment request.
    ///
    /// # Examples
    ///
    /// ```
    /// use freight_quote_engine::models::{ServiceType, ShipmentRequest};
    ///
    /// let request = ShipmentRequest::new("Shanghai", "Rotterdam", "5000 kg", ServiceType::Sea, "general");
    /// assert_eq!(request.origin, "Shanghai");
    /// ```
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: impl Into<String>,
        service_type: ServiceType,
        cargo_type: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight: weight.into(),
            service_type,
            cargo_type: cargo_type.into(),
        }
    }
}

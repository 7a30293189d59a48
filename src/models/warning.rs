//! Data-quality warnings raised while pricing a quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceType;

/// A warning generated during pricing.
///
/// Warnings indicate input or tariff gaps that were worked around rather
/// than rejected. They travel with the quote so they can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl QuoteWarning {
    /// Code for a weight that could not be parsed and was replaced.
    pub const WEIGHT_DEFAULTED: &'static str = "WEIGHT_DEFAULTED";
    /// Code for a lane that fell back to the service default rate.
    pub const UNKNOWN_LANE: &'static str = "UNKNOWN_LANE";

    /// The weight string was unparseable and the default weight was used.
    pub fn weight_defaulted(input: &str, default_weight_kg: Decimal) -> Self {
        Self {
            code: Self::WEIGHT_DEFAULTED.to_string(),
            message: format!(
                "Weight '{}' could not be parsed; priced at the default {} kg",
                input, default_weight_kg
            ),
            severity: "medium".to_string(),
        }
    }

    /// No lane rate matched and the service default rate was used.
    pub fn unknown_lane(origin: &str, destination: &str, service_type: ServiceType) -> Self {
        Self {
            code: Self::UNKNOWN_LANE.to_string(),
            message: format!(
                "No {} lane rate for '{}' -> '{}'; default rate applied",
                service_type, origin, destination
            ),
            severity: "low".to_string(),
        }
    }
}

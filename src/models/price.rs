//! Price breakdown models.
//!
//! A [`PriceBreakdown`] is the baseline price for a shipment before any
//! carrier multiplier is applied. A [`ChargeBreakdown`] is the same set of
//! charges without a total, as quoted by an individual carrier.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Rounds a currency amount to cents, halves away from zero.
///
/// # Examples
///
/// ```
/// use freight_quote_engine::models::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("10.005").unwrap()), Decimal::from_str("10.01").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("10.004").unwrap()), Decimal::from_str("10.00").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The baseline price of a shipment, split into its charges.
///
/// Every component is rounded to cents and `total` is the exact sum of the
/// four rounded components.
///
/// # Example
///
/// ```
/// use freight_quote_engine::models::PriceBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PriceBreakdown::from_components(
///     Decimal::from_str("1400").unwrap(),
///     Decimal::from_str("112").unwrap(),
///     Decimal::from_str("35").unwrap(),
///     Decimal::from_str("75").unwrap(),
/// ).unwrap();
/// assert_eq!(breakdown.total, Decimal::from_str("1622.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Freight charge for the weight moved on the lane.
    pub base_rate: Decimal,
    /// Fuel surcharge, a percentage of the base rate.
    pub fuel_surcharge: Decimal,
    /// Flat security fee.
    pub security_fee: Decimal,
    /// Flat documentation fee.
    pub documentation: Decimal,
    /// Sum of the four charges.
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Builds a breakdown from unrounded charges.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the total overflows.
    pub fn from_components(
        base_rate: Decimal,
        fuel_surcharge: Decimal,
        security_fee: Decimal,
        documentation: Decimal,
    ) -> EngineResult<Self> {
        let charges = ChargeBreakdown {
            base_rate: round_currency(base_rate),
            fuel_surcharge: round_currency(fuel_surcharge),
            security_fee: round_currency(security_fee),
            documentation: round_currency(documentation),
        };
        let total = charges.sum()?;

        Ok(Self {
            base_rate: charges.base_rate,
            fuel_surcharge: charges.fuel_surcharge,
            security_fee: charges.security_fee,
            documentation: charges.documentation,
            total,
        })
    }

    /// Returns the charges without the total.
    pub fn charges(&self) -> ChargeBreakdown {
        ChargeBreakdown {
            base_rate: self.base_rate,
            fuel_surcharge: self.fuel_surcharge,
            security_fee: self.security_fee,
            documentation: self.documentation,
        }
    }
}

/// Itemised charges quoted by a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Freight charge.
    pub base_rate: Decimal,
    /// Fuel surcharge.
    pub fuel_surcharge: Decimal,
    /// Security fee.
    pub security_fee: Decimal,
    /// Documentation fee.
    pub documentation: Decimal,
}

impl ChargeBreakdown {
    /// Sum of all charges.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the sum overflows.
    pub fn sum(&self) -> EngineResult<Decimal> {
        [self.fuel_surcharge, self.security_fee, self.documentation]
            .into_iter()
            .try_fold(self.base_rate, |acc, charge| acc.checked_add(charge))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "charge total overflowed ({} + {} + {} + {})",
                    self.base_rate, self.fuel_surcharge, self.security_fee, self.documentation
                ),
            })
    }
}

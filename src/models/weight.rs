//! Shipment weight parsing.
//!
//! Weights arrive as free text such as `"1500 kg"` or `"3,300 lbs"`. They are
//! parsed once into a [`Weight`] so pricing works on a plain kilogram figure.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Unit attached to a weight figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms (the default when no unit is given).
    Kilograms,
    /// Avoirdupois pounds.
    Pounds,
    /// Metric tonnes.
    Tonnes,
}

impl WeightUnit {
    /// Recognises a unit suffix. Returns `None` for anything unfamiliar.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().trim_end_matches('.').to_lowercase().as_str() {
            "" | "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => {
                Some(WeightUnit::Kilograms)
            }
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
            "t" | "mt" | "tonne" | "tonnes" | "ton" | "tons" => Some(WeightUnit::Tonnes),
            _ => None,
        }
    }

    /// Kilograms in one unit.
    pub fn kilograms_per_unit(&self) -> Decimal {
        match self {
            WeightUnit::Kilograms => Decimal::ONE,
            WeightUnit::Pounds => Decimal::new(45359237, 8),
            WeightUnit::Tonnes => Decimal::new(1000, 0),
        }
    }
}

/// A parsed weight: a numeric value and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// The numeric part as entered.
    pub value: Decimal,
    /// The unit the value is expressed in.
    pub unit: WeightUnit,
}

impl Weight {
    /// Creates a weight in kilograms.
    pub fn kilograms(value: Decimal) -> Self {
        Self {
            value,
            unit: WeightUnit::Kilograms,
        }
    }

    /// Parses a weight string made of a numeric prefix and an optional unit.
    ///
    /// Thousands separators are ignored. A missing or unrecognised unit is
    /// read as kilograms.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeight` when the string has no numeric prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use freight_quote_engine::models::{Weight, WeightUnit};
    /// use rust_decimal::Decimal;
    ///
    /// let weight = Weight::parse("1,500 kg").unwrap();
    /// assert_eq!(weight.value, Decimal::new(1500, 0));
    /// assert_eq!(weight.unit, WeightUnit::Kilograms);
    ///
    /// assert!(Weight::parse("N/A").is_err());
    /// ```
    pub fn parse(input: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidWeight {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(trimmed.len());
        let (number, suffix) = trimmed.split_at(split);

        let number: String = number.chars().filter(|c| *c != ',').collect();
        if !number.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let value = Decimal::from_str(&number).map_err(|_| invalid())?;
        let unit = WeightUnit::from_suffix(suffix).unwrap_or(WeightUnit::Kilograms);

        // Weights too large to express in kilograms are rejected here so
        // that `to_kilograms` cannot overflow.
        if value.checked_mul(unit.kilograms_per_unit()).is_none() {
            return Err(invalid());
        }

        Ok(Self { value, unit })
    }

    /// Returns the weight converted to kilograms.
    pub fn to_kilograms(&self) -> Decimal {
        self.value * self.unit.kilograms_per_unit()
    }
}

impl FromStr for Weight {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weight::parse(s)
    }
}

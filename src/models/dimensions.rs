//! Package dimensions parsed from `"LxWxH unit"` strings.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Unit attached to a set of dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Centimetres (the default when no unit is given).
    Centimeters,
    /// Metres.
    Meters,
    /// Inches.
    Inches,
}

impl LengthUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().trim_end_matches('.').to_lowercase().as_str() {
            "" | "cm" | "cms" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(LengthUnit::Centimeters)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meters),
            "in" | "inch" | "inches" | "\"" => Some(LengthUnit::Inches),
            _ => None,
        }
    }

    /// Metres in one unit.
    pub fn meters_per_unit(&self) -> Decimal {
        match self {
            LengthUnit::Centimeters => Decimal::new(1, 2),
            LengthUnit::Meters => Decimal::ONE,
            LengthUnit::Inches => Decimal::new(254, 4),
        }
    }
}

/// Length, width and height of a consignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in `unit`.
    pub length: Decimal,
    /// Width in `unit`.
    pub width: Decimal,
    /// Height in `unit`.
    pub height: Decimal,
    /// The unit all three sides are expressed in.
    pub unit: LengthUnit,
}

impl Dimensions {
    /// Parses a string such as `"120x80x100 cm"`.
    ///
    /// Sides may be separated by `x`, `X`, `*` or `×`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` unless exactly three positive sides and a
    /// recognised (or absent) unit are present, or when the enclosed volume
    /// is too large to compute.
    ///
    /// # Examples
    ///
    /// ```
    /// use freight_quote_engine::models::{Dimensions, LengthUnit};
    /// use rust_decimal::Decimal;
    ///
    /// let dims = Dimensions::parse("120x80x100 cm").unwrap();
    /// assert_eq!(dims.unit, LengthUnit::Centimeters);
    /// assert_eq!(dims.volume_cubic_meters().unwrap(), Decimal::new(96, 2));
    /// ```
    pub fn parse(input: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidDimensions {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let last_digit = trimmed
            .rfind(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (numbers, suffix) = trimmed.split_at(last_digit + 1);

        let unit = LengthUnit::from_suffix(suffix).ok_or_else(invalid)?;

        let sides = numbers
            .split(|c: char| matches!(c, 'x' | 'X' | '*' | '×'))
            .map(|side| Decimal::from_str(side.trim()).map_err(|_| invalid()))
            .collect::<EngineResult<Vec<Decimal>>>()?;

        let dims = match sides.as_slice() {
            [length, width, height] => Self {
                length: *length,
                width: *width,
                height: *height,
                unit,
            },
            _ => return Err(invalid()),
        };

        if sides.iter().any(|side| *side <= Decimal::ZERO) || dims.checked_volume().is_none() {
            return Err(invalid());
        }

        Ok(dims)
    }

    /// Returns the enclosed volume in cubic metres, rounded to 3 dp.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the volume overflows. Parsed dimensions
    /// never do.
    pub fn volume_cubic_meters(&self) -> EngineResult<Decimal> {
        self.checked_volume()
            .map(|volume| volume.round_dp(3))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "volume overflowed ({} x {} x {} {:?})",
                    self.length, self.width, self.height, self.unit
                ),
            })
    }

    fn checked_volume(&self) -> Option<Decimal> {
        let factor = self.unit.meters_per_unit();
        let length = self.length.checked_mul(factor)?;
        let width = self.width.checked_mul(factor)?;
        let height = self.height.checked_mul(factor)?;
        length.checked_mul(width)?.checked_mul(height)
    }
}

impl FromStr for Dimensions {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimensions::parse(s)
    }
}

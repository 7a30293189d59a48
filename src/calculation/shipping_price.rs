//! Baseline shipping price calculation.
//!
//! This module prices a [`ShipmentRequest`] into a [`PriceBreakdown`]:
//!
//! - `base_rate = max(rate_per_kg x weight_kg, minimum_charge)`
//! - `fuel_surcharge = base_rate x fuel_surcharge_rate`
//! - `security_fee` and `documentation` are the service flat fees plus any
//!   cargo-type surcharge
//! - `total` is the sum of the four charges, each rounded to cents

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{QuoteConfig, WeightParseMode, WeightPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{PriceBreakdown, QuoteWarning, ShipmentRequest, Weight, round_currency};

use super::checked_product;
use super::lane_rate::{LaneRateLookupResult, RateSource, lookup_lane_rate};

/// The outcome of interpreting a raw weight string under a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightResolution {
    /// Weight to price, in kilograms.
    pub weight_kg: Decimal,
    /// The parsed weight, or `None` when the default was substituted.
    pub parsed: Option<Weight>,
    /// Set when the default weight was substituted.
    pub warning: Option<QuoteWarning>,
}

/// Interprets a raw weight string.
///
/// # Errors
///
/// Under [`WeightParseMode::Strict`] an unparseable weight is returned as
/// `InvalidWeight`. Under [`WeightParseMode::Lenient`] the policy's default
/// weight is used instead and a `WEIGHT_DEFAULTED` warning is attached.
pub fn resolve_weight(raw: &str, policy: &WeightPolicy) -> EngineResult<WeightResolution> {
    match Weight::parse(raw) {
        Ok(weight) => Ok(WeightResolution {
            weight_kg: weight.to_kilograms(),
            parsed: Some(weight),
            warning: None,
        }),
        Err(err) => match policy.mode {
            WeightParseMode::Strict => Err(err),
            WeightParseMode::Lenient => {
                warn!(
                    weight = raw,
                    default_weight_kg = %policy.default_weight_kg,
                    "Unparseable weight, using default"
                );
                Ok(WeightResolution {
                    weight_kg: policy.default_weight_kg,
                    parsed: None,
                    warning: Some(QuoteWarning::weight_defaulted(
                        raw,
                        policy.default_weight_kg,
                    )),
                })
            }
        },
    }
}

/// The result of pricing a shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingResult {
    /// The baseline price breakdown.
    pub breakdown: PriceBreakdown,
    /// The weight that was priced, in kilograms.
    pub weight_kg: Decimal,
    /// How the per-kilogram rate was found.
    pub lane: LaneRateLookupResult,
    /// Data-quality warnings raised while pricing.
    pub warnings: Vec<QuoteWarning>,
}

/// Calculates the baseline price for a shipment using the tariff's weight
/// policy.
///
/// # Examples
///
/// ```no_run
/// use freight_quote_engine::calculation::calculate_shipping_price;
/// use freight_quote_engine::config::ConfigLoader;
/// use freight_quote_engine::models::{ServiceType, ShipmentRequest};
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let request = ShipmentRequest::new("Shanghai", "Rotterdam", "5000 kg", ServiceType::Sea, "general");
///
/// let result = calculate_shipping_price(&request, loader.config()).unwrap();
/// println!("Total: ${}", result.breakdown.total);
/// ```
pub fn calculate_shipping_price(
    request: &ShipmentRequest,
    config: &QuoteConfig,
) -> EngineResult<PricingResult> {
    calculate_shipping_price_with_policy(request, config, &config.tariff().weight)
}

/// Calculates the baseline price for a shipment under an explicit weight
/// policy.
///
/// # Errors
///
/// Returns `InvalidWeight` for an unparseable weight under a strict policy,
/// or `CalculationError` if a product or sum overflows. A weight can parse
/// and still be too large to price.
pub fn calculate_shipping_price_with_policy(
    request: &ShipmentRequest,
    config: &QuoteConfig,
    policy: &WeightPolicy,
) -> EngineResult<PricingResult> {
    let mut warnings = Vec::new();

    let weight = resolve_weight(&request.weight, policy)?;
    warnings.extend(weight.warning);

    let lane = lookup_lane_rate(
        &request.origin,
        &request.destination,
        request.service_type,
        config,
    );
    if lane.source == RateSource::ServiceDefault {
        warnings.push(QuoteWarning::unknown_lane(
            &request.origin,
            &request.destination,
            request.service_type,
        ));
    }

    let rates = config.rate_table().services.get(request.service_type);
    let surcharge = config
        .rate_table()
        .cargo_surcharge(&request.cargo_type)
        .cloned()
        .unwrap_or_default();

    let freight = checked_product(lane.rate_per_kg, weight.weight_kg, "freight charge")?;
    let base_rate = round_currency(freight.max(rates.minimum_charge));
    let fuel_surcharge = checked_product(base_rate, rates.fuel_surcharge_rate, "fuel surcharge")?;
    let security_fee = checked_sum(rates.security_fee, surcharge.security_fee, "security fee")?;
    let documentation =
        checked_sum(rates.documentation_fee, surcharge.documentation_fee, "documentation fee")?;

    let breakdown =
        PriceBreakdown::from_components(base_rate, fuel_surcharge, security_fee, documentation)?;

    Ok(PricingResult {
        breakdown,
        weight_kg: weight.weight_kg,
        lane,
        warnings,
    })
}

fn checked_sum(a: Decimal, b: Decimal, context: &str) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| EngineError::CalculationError {
        message: format!("{} overflowed ({} + {})", context, a, b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::{create_test_config, dec};
    use crate::models::ServiceType;

    fn request(weight: &str, service_type: ServiceType, cargo_type: &str) -> ShipmentRequest {
        ShipmentRequest::new("Shanghai", "Rotterdam", weight, service_type, cargo_type)
    }

    #[test]
    fn test_sea_shanghai_to_rotterdam_5000kg() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("5000 kg", ServiceType::Sea, "general"), &config)
                .unwrap();

        // 5000kg * $0.28 = $1400.00, fuel 8% = $112.00, + $35 + $75
        assert_eq!(result.breakdown.base_rate, dec("1400.00"));
        assert_eq!(result.breakdown.fuel_surcharge, dec("112.00"));
        assert_eq!(result.breakdown.security_fee, dec("35.00"));
        assert_eq!(result.breakdown.documentation, dec("75.00"));
        assert_eq!(result.breakdown.total, dec("1622.00"));
        assert_eq!(result.weight_kg, dec("5000"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_air_uses_higher_fuel_rate() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("500 kg", ServiceType::Air, "general"), &config)
                .unwrap();

        // 500kg * $4.10 = $2050.00, fuel 25% = $512.50
        assert_eq!(result.breakdown.base_rate, dec("2050.00"));
        assert_eq!(result.breakdown.fuel_surcharge, dec("512.50"));
        assert_eq!(result.breakdown.total, dec("2672.50"));
    }

    #[test]
    fn test_minimum_charge_applies_to_light_shipments() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("10 kg", ServiceType::Sea, "general"), &config)
                .unwrap();

        // 10kg * $0.28 = $2.80 is below the $250 minimum
        assert_eq!(result.breakdown.base_rate, dec("250.00"));
        assert_eq!(result.breakdown.fuel_surcharge, dec("20.00"));
    }

    #[test]
    fn test_hazardous_cargo_adds_flat_fees() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("5000 kg", ServiceType::Sea, "Hazardous"), &config)
                .unwrap();

        assert_eq!(result.breakdown.security_fee, dec("185.00"));
        assert_eq!(result.breakdown.documentation, dec("195.00"));
        assert_eq!(result.breakdown.total, dec("1892.00"));
    }

    #[test]
    fn test_unknown_cargo_type_adds_nothing() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("5000 kg", ServiceType::Sea, "textiles"), &config)
                .unwrap();

        assert_eq!(result.breakdown.security_fee, dec("35.00"));
        assert_eq!(result.breakdown.documentation, dec("75.00"));
    }

    #[test]
    fn test_pounds_are_converted_before_pricing() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("10000 lbs", ServiceType::Sea, "general"), &config)
                .unwrap();

        // 4535.9237kg * $0.28 = $1270.058636 -> $1270.06
        assert_eq!(result.breakdown.base_rate, dec("1270.06"));
    }

    #[test]
    fn test_malformed_weight_uses_default_weight() {
        let config = create_test_config();
        let result =
            calculate_shipping_price(&request("N/A", ServiceType::Air, "general"), &config)
                .unwrap();

        // 100kg * $4.10 = $410.00
        assert_eq!(result.weight_kg, dec("100"));
        assert_eq!(result.breakdown.base_rate, dec("410.00"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, QuoteWarning::WEIGHT_DEFAULTED);
    }

    #[test]
    fn test_strict_policy_rejects_malformed_weight() {
        let config = create_test_config();
        let result = calculate_shipping_price_with_policy(
            &request("N/A", ServiceType::Air, "general"),
            &config,
            &WeightPolicy::strict(),
        );

        match result {
            Err(EngineError::InvalidWeight { input }) => assert_eq!(input, "N/A"),
            other => panic!("Expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_lane_records_warning_and_uses_default_rate() {
        let config = create_test_config();
        let shipment =
            ShipmentRequest::new("Atlantis", "Rotterdam", "1000 kg", ServiceType::Sea, "general");
        let result = calculate_shipping_price(&shipment, &config).unwrap();

        // 1000kg * $0.45 default = $450.00
        assert_eq!(result.breakdown.base_rate, dec("450.00"));
        assert_eq!(result.lane.source, RateSource::ServiceDefault);
        assert_eq!(result.warnings[0].code, QuoteWarning::UNKNOWN_LANE);
    }

    #[test]
    fn test_total_equals_sum_of_components() {
        let config = create_test_config();
        for weight in ["1 kg", "333.33 kg", "7777 kg", "1,234.5 lbs", "2.2 t"] {
            for service_type in ServiceType::ALL {
                let result = calculate_shipping_price(
                    &request(weight, service_type, "perishable"),
                    &config,
                )
                .unwrap();
                let b = &result.breakdown;
                assert_eq!(
                    b.total,
                    b.base_rate + b.fuel_surcharge + b.security_fee + b.documentation
                );
            }
        }
    }

    #[test]
    fn test_identical_requests_price_identically() {
        let config = create_test_config();
        let shipment = request("4321 kg", ServiceType::Ground, "fragile");

        let first = calculate_shipping_price(&shipment, &config).unwrap();
        let second = calculate_shipping_price(&shipment, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_weight_too_large_to_price_is_an_error() {
        let config = create_test_config();
        // 1.9e28kg * $4.10 fits in a Decimal; adding the surcharges does not.
        let shipment = request("19000000000000000000000000000 kg", ServiceType::Air, "general");

        match calculate_shipping_price(&shipment, &config) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("overflowed"))
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_freight_charge_is_an_error() {
        let config = create_test_config();
        let shipment = request("70000000000000000000000000000 kg", ServiceType::Air, "general");

        assert!(matches!(
            calculate_shipping_price(&shipment, &config),
            Err(EngineError::CalculationError { .. })
        ));
    }
}

//! Carrier fan-out.
//!
//! One baseline [`PriceBreakdown`] becomes one [`CarrierRate`] per catalog
//! template for the requested service type. Each template scales every
//! charge by its multiplier.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{CarrierCatalog, CarrierTemplate};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CarrierPrice, CarrierRate, ChargeBreakdown, PriceBreakdown, ServiceType, round_currency,
};

use super::checked_product;

/// Generates carrier rates from a baseline price.
///
/// Rates are returned in catalog order, duplicates included. Every rate
/// shares the same `transit_time` and `valid_until`.
///
/// # Arguments
///
/// * `breakdown` - The baseline price
/// * `service_type` - Selects the catalog list
/// * `transit_time` - The estimate shared by every rate
/// * `catalog` - The carrier catalog
/// * `currency` - ISO 4217 code for every price
/// * `valid_until` - Expiry shared by every rate
///
/// # Errors
///
/// Returns `EmptyCarrierCatalog` when the list for `service_type` is empty,
/// or `CalculationError` if a scaled amount overflows.
pub fn generate_carrier_rates(
    breakdown: &PriceBreakdown,
    service_type: ServiceType,
    transit_time: &str,
    catalog: &CarrierCatalog,
    currency: &str,
    valid_until: DateTime<Utc>,
) -> EngineResult<Vec<CarrierRate>> {
    let templates = catalog.templates(service_type);
    if templates.is_empty() {
        return Err(EngineError::EmptyCarrierCatalog { service_type });
    }

    let rates = templates
        .iter()
        .map(|template| {
            let price = scale_price(breakdown, template, currency)?;
            debug!(
                carrier_id = %template.id,
                multiplier = %template.multiplier,
                amount = %price.amount,
                "Generated carrier rate"
            );
            Ok(CarrierRate {
                carrier_id: template.id.clone(),
                carrier_name: template.name.clone(),
                service_type,
                transit_time: transit_time.to_string(),
                price,
                valid_until,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(rates)
}

fn scale_price(
    breakdown: &PriceBreakdown,
    template: &CarrierTemplate,
    currency: &str,
) -> EngineResult<CarrierPrice> {
    let scale = |amount: Decimal, context: &str| -> EngineResult<Decimal> {
        checked_product(amount, template.multiplier, context).map(round_currency)
    };

    Ok(CarrierPrice {
        amount: scale(breakdown.total, "carrier total")?,
        currency: currency.to_string(),
        breakdown: ChargeBreakdown {
            base_rate: scale(breakdown.base_rate, "carrier base rate")?,
            fuel_surcharge: scale(breakdown.fuel_surcharge, "carrier fuel surcharge")?,
            security_fee: scale(breakdown.security_fee, "carrier security fee")?,
            documentation: scale(breakdown.documentation, "carrier documentation fee")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::{catalog, dec};
    use chrono::TimeZone;

    fn sea_baseline() -> PriceBreakdown {
        PriceBreakdown::from_components(dec("1400"), dec("112"), dec("35"), dec("75")).unwrap()
    }

    fn air_baseline() -> PriceBreakdown {
        PriceBreakdown::from_components(dec("2050"), dec("512.50"), dec("60"), dec("50")).unwrap()
    }

    fn expiry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_rate_per_template_in_catalog_order() {
        let rates = generate_carrier_rates(
            &sea_baseline(),
            ServiceType::Sea,
            "18-22 days",
            &catalog(),
            "USD",
            expiry(),
        )
        .unwrap();

        let ids: Vec<&str> = rates.iter().map(|r| r.carrier_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["MAERSK", "MSC", "COSCO", "HAPAG", "MAERSK", "MSC", "COSCO"]
        );
    }

    #[test]
    fn test_multiplier_scales_every_charge() {
        let rates = generate_carrier_rates(
            &sea_baseline(),
            ServiceType::Sea,
            "18-22 days",
            &catalog(),
            "USD",
            expiry(),
        )
        .unwrap();

        let msc = &rates[1];
        assert_eq!(msc.price.amount, dec("1703.10"));
        assert_eq!(msc.price.breakdown.base_rate, dec("1470.00"));
        assert_eq!(msc.price.breakdown.fuel_surcharge, dec("117.60"));
        assert_eq!(msc.price.breakdown.security_fee, dec("36.75"));
        assert_eq!(msc.price.breakdown.documentation, dec("78.75"));

        assert_eq!(rates[2].price.amount, dec("1540.90"));
    }

    #[test]
    fn test_unit_multiplier_reproduces_baseline() {
        let baseline = sea_baseline();
        let rates = generate_carrier_rates(
            &baseline,
            ServiceType::Sea,
            "18-22 days",
            &catalog(),
            "USD",
            expiry(),
        )
        .unwrap();

        assert_eq!(rates[0].price.amount, baseline.total);
        assert_eq!(rates[0].price.breakdown, baseline.charges());
    }

    #[test]
    fn test_air_rates_round_each_charge() {
        let rates = generate_carrier_rates(
            &air_baseline(),
            ServiceType::Air,
            "4-6 days",
            &catalog(),
            "USD",
            expiry(),
        )
        .unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates[1].carrier_name, "FedEx Express");
        assert_eq!(rates[1].price.amount, dec("2993.20"));

        // 2672.50 * 1.05 = 2806.125 -> 2806.13
        let ups = &rates[2];
        assert_eq!(ups.price.amount, dec("2806.13"));
        assert_eq!(ups.price.breakdown.fuel_surcharge, dec("538.13"));
    }

    #[test]
    fn test_rates_share_transit_time_expiry_and_currency() {
        let rates = generate_carrier_rates(
            &air_baseline(),
            ServiceType::Ground,
            "5-8 days",
            &catalog(),
            "EUR",
            expiry(),
        )
        .unwrap();

        for rate in &rates {
            assert_eq!(rate.service_type, ServiceType::Ground);
            assert_eq!(rate.transit_time, "5-8 days");
            assert_eq!(rate.valid_until, expiry());
            assert_eq!(rate.price.currency, "EUR");
        }
    }

    #[test]
    fn test_empty_catalog_list_is_an_error() {
        let mut catalog = catalog();
        catalog.carriers.air.clear();

        let result = generate_carrier_rates(
            &air_baseline(),
            ServiceType::Air,
            "4-6 days",
            &catalog,
            "USD",
            expiry(),
        );

        match result {
            Err(EngineError::EmptyCarrierCatalog { service_type }) => {
                assert_eq!(service_type, ServiceType::Air)
            }
            other => panic!("Expected EmptyCarrierCatalog, got {:?}", other),
        }
    }
}

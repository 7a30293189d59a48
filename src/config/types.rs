//! Configuration types for quote pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML tariff files. [`QuoteConfig`] aggregates them
//! and refuses to exist in an inconsistent state.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::ServiceType;

/// One value per service type.
///
/// Every service type must be present, so lookups cannot miss.
#[derive(Debug, Clone, Deserialize)]
pub struct PerService<T> {
    /// Value for sea freight.
    pub sea: T,
    /// Value for air freight.
    pub air: T,
    /// Value for ground freight.
    pub ground: T,
}

impl<T> PerService<T> {
    /// Returns the value for a service type.
    pub fn get(&self, service_type: ServiceType) -> &T {
        match service_type {
            ServiceType::Sea => &self.sea,
            ServiceType::Air => &self.air,
            ServiceType::Ground => &self.ground,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (ServiceType, &T)> {
        ServiceType::ALL.into_iter().map(move |st| (st, self.get(st)))
    }
}

/// How the engine treats a weight string with no numeric prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightParseMode {
    /// Substitute the default weight and record a warning.
    #[default]
    Lenient,
    /// Reject the request with `InvalidWeight`.
    Strict,
}

/// Weight parsing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WeightPolicy {
    /// Lenient or strict handling of unparseable weights.
    #[serde(default)]
    pub mode: WeightParseMode,
    /// Weight used when a lenient parse fails.
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: Decimal,
}

fn default_weight_kg() -> Decimal {
    Decimal::new(100, 0)
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            mode: WeightParseMode::Lenient,
            default_weight_kg: default_weight_kg(),
        }
    }
}

impl WeightPolicy {
    /// A policy that surfaces parse failures.
    pub fn strict() -> Self {
        Self {
            mode: WeightParseMode::Strict,
            ..Self::default()
        }
    }
}

/// Tariff metadata from tariff.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffMetadata {
    /// Human-readable tariff name.
    pub name: String,
    /// Tariff version or effective date.
    pub version: String,
    /// ISO 4217 currency all amounts are expressed in.
    pub currency: String,
    /// Days a quote's carrier rates stay valid.
    pub quote_validity_days: u32,
    /// Weight parsing policy.
    #[serde(default)]
    pub weight: WeightPolicy,
}

/// A geographic region and the place names that identify it.
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    /// Region code used by lanes (e.g. "asia").
    pub code: String,
    /// Lowercase place names matched as whole words.
    pub keywords: Vec<String>,
}

/// Regions file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// Regions in match-priority order.
    pub regions: Vec<Region>,
}

/// Rates and flat fees for one service type.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRates {
    /// Per-kilogram rate when no lane matches.
    pub default_rate_per_kg: Decimal,
    /// Floor for the base rate.
    pub minimum_charge: Decimal,
    /// Fuel surcharge as a fraction of the base rate.
    pub fuel_surcharge_rate: Decimal,
    /// Flat security fee.
    pub security_fee: Decimal,
    /// Flat documentation fee.
    pub documentation_fee: Decimal,
}

/// A per-kilogram rate for one region pair and service type.
#[derive(Debug, Clone, Deserialize)]
pub struct LaneRate {
    /// Origin region code.
    pub origin: String,
    /// Destination region code.
    pub destination: String,
    /// Service type the rate applies to.
    pub service_type: ServiceType,
    /// Rate per kilogram.
    pub rate_per_kg: Decimal,
}

/// Extra flat fees for a cargo category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoSurcharge {
    /// Added to the service security fee.
    #[serde(default)]
    pub security_fee: Decimal,
    /// Added to the service documentation fee.
    #[serde(default)]
    pub documentation_fee: Decimal,
}

/// Rate table from rates.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// Defaults and fees per service type.
    pub services: PerService<ServiceRates>,
    /// Lane-specific rates.
    #[serde(default)]
    pub lanes: Vec<LaneRate>,
    /// Surcharges keyed by normalised cargo type.
    #[serde(default)]
    pub cargo_types: HashMap<String, CargoSurcharge>,
}

impl RateTable {
    /// Finds the lane rate for a region pair, if one is configured.
    pub fn lane(
        &self,
        origin_region: &str,
        destination_region: &str,
        service_type: ServiceType,
    ) -> Option<&LaneRate> {
        self.lanes.iter().find(|lane| {
            lane.service_type == service_type
                && lane.origin == origin_region
                && lane.destination == destination_region
        })
    }

    /// Looks up the surcharge for a cargo type, ignoring case and separators.
    pub fn cargo_surcharge(&self, cargo_type: &str) -> Option<&CargoSurcharge> {
        self.cargo_types.get(&normalize_cargo_type(cargo_type))
    }
}

/// Normalises a cargo type to its table key: `"High Value"` → `"high_value"`.
pub fn normalize_cargo_type(cargo_type: &str) -> String {
    cargo_type
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// An inclusive range of transit days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TransitRange {
    /// Fastest expected delivery.
    pub min_days: u32,
    /// Slowest expected delivery.
    pub max_days: u32,
}

impl TransitRange {
    /// Formats the range for display: "18-22 days", "3 days" or "1 day".
    pub fn describe(&self) -> String {
        match (self.min_days, self.max_days) {
            (1, 1) => "1 day".to_string(),
            (min, max) if min == max => format!("{} days", min),
            (min, max) => format!("{}-{} days", min, max),
        }
    }
}

/// Transit ranges for one service type.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitProfile {
    /// Used when the movement cannot be classified.
    pub default: TransitRange,
    /// Used when origin and destination share a region.
    #[serde(default)]
    pub regional: Option<TransitRange>,
    /// Used when origin and destination are in different regions.
    #[serde(default)]
    pub intercontinental: Option<TransitRange>,
}

/// Transit table from transit.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitTable {
    /// Profiles per service type.
    pub services: PerService<TransitProfile>,
}

/// A catalog entry describing one carrier offer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarrierTemplate {
    /// Carrier identifier (may repeat within a list).
    pub id: String,
    /// Carrier display name.
    pub name: String,
    /// Factor applied to the baseline price. Must be positive.
    pub multiplier: Decimal,
}

/// Carrier catalog from carriers.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierCatalog {
    /// Ordered carrier templates per service type.
    pub carriers: PerService<Vec<CarrierTemplate>>,
}

impl CarrierCatalog {
    /// Returns the templates for a service type in catalog order.
    pub fn templates(&self, service_type: ServiceType) -> &[CarrierTemplate] {
        self.carriers.get(service_type)
    }
}

/// The complete tariff loaded from YAML files.
///
/// Construction validates every cross-file invariant, so a `QuoteConfig`
/// in hand is always safe to price against.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Tariff metadata.
    tariff: TariffMetadata,
    /// Regions in match-priority order, keywords lowercased.
    regions: Vec<Region>,
    /// Rates and fees.
    rate_table: RateTable,
    /// Transit ranges.
    transit: TransitTable,
    /// Carrier catalog.
    catalog: CarrierCatalog,
}

impl QuoteConfig {
    /// Creates a new QuoteConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCarrierCatalog` when a service type has no carriers and
    /// `InvalidConfig` for any other inconsistency.
    pub fn new(
        tariff: TariffMetadata,
        regions: Vec<Region>,
        rate_table: RateTable,
        transit: TransitTable,
        catalog: CarrierCatalog,
    ) -> EngineResult<Self> {
        let regions = regions
            .into_iter()
            .map(|region| Region {
                code: region.code,
                keywords: region
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .collect(),
            })
            .collect();

        let mut rate_table = rate_table;
        rate_table.cargo_types = rate_table
            .cargo_types
            .into_iter()
            .map(|(key, surcharge)| (normalize_cargo_type(&key), surcharge))
            .collect();

        let config = Self {
            tariff,
            regions,
            rate_table,
            transit,
            catalog,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| Err(EngineError::InvalidConfig { message });

        if self.tariff.quote_validity_days == 0 {
            return invalid("quote_validity_days must be at least 1".to_string());
        }
        if self.tariff.weight.default_weight_kg <= Decimal::ZERO {
            return invalid("default_weight_kg must be positive".to_string());
        }

        let mut codes = HashSet::new();
        for region in &self.regions {
            if !codes.insert(region.code.as_str()) {
                return invalid(format!("duplicate region code '{}'", region.code));
            }
            if region.keywords.iter().any(|k| k.is_empty()) {
                return invalid(format!("region '{}' has an empty keyword", region.code));
            }
        }

        for (service_type, rates) in self.rate_table.services.iter() {
            let amounts = [
                rates.default_rate_per_kg,
                rates.minimum_charge,
                rates.fuel_surcharge_rate,
                rates.security_fee,
                rates.documentation_fee,
            ];
            if amounts.iter().any(|a| a.is_sign_negative()) {
                return invalid(format!("{} rates must not be negative", service_type));
            }
        }

        let mut lanes = HashSet::new();
        for lane in &self.rate_table.lanes {
            for code in [&lane.origin, &lane.destination] {
                if !codes.contains(code.as_str()) {
                    return invalid(format!("lane references unknown region '{}'", code));
                }
            }
            if !lanes.insert((&lane.origin, &lane.destination, lane.service_type)) {
                return invalid(format!(
                    "duplicate {} lane '{}' -> '{}'",
                    lane.service_type, lane.origin, lane.destination
                ));
            }
            if lane.rate_per_kg.is_sign_negative() {
                return invalid(format!(
                    "lane '{}' -> '{}' has a negative rate",
                    lane.origin, lane.destination
                ));
            }
        }

        for (service_type, profile) in self.transit.services.iter() {
            let ranges = [
                Some(profile.default),
                profile.regional,
                profile.intercontinental,
            ];
            if ranges
                .iter()
                .flatten()
                .any(|r| r.min_days == 0 || r.min_days > r.max_days)
            {
                return invalid(format!("{} transit range is empty or inverted", service_type));
            }
        }

        for (service_type, templates) in self.catalog.carriers.iter() {
            if templates.is_empty() {
                return Err(EngineError::EmptyCarrierCatalog { service_type });
            }
            if let Some(template) = templates.iter().find(|t| t.multiplier <= Decimal::ZERO) {
                return invalid(format!(
                    "carrier '{}' has non-positive multiplier {}",
                    template.id, template.multiplier
                ));
            }
        }

        Ok(())
    }

    /// Returns the tariff metadata.
    pub fn tariff(&self) -> &TariffMetadata {
        &self.tariff
    }

    /// Returns the regions in match-priority order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns the rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the transit table.
    pub fn transit(&self) -> &TransitTable {
        &self.transit
    }

    /// Returns the carrier catalog.
    pub fn catalog(&self) -> &CarrierCatalog {
        &self.catalog
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_valid_config_normalises_keywords_and_cargo_keys() {
        let config = create_test_config();

        assert!(config.regions()[0].keywords.contains(&"singapore".to_string()));
        assert!(config.rate_table().cargo_surcharge("HAZARDOUS").is_some());
        assert!(config.rate_table().cargo_surcharge("High Value").is_some());
        assert!(config.rate_table().cargo_surcharge("general").is_none());
    }

    #[test]
    fn test_empty_carrier_list_fails_fast() {
        let mut catalog = catalog();
        catalog.carriers.ground.clear();

        let result = QuoteConfig::new(tariff(), regions(), rate_table(), transit(), catalog);

        match result {
            Err(EngineError::EmptyCarrierCatalog { service_type }) => {
                assert_eq!(service_type, ServiceType::Ground);
            }
            other => panic!("Expected EmptyCarrierCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_multiplier_is_rejected() {
        let mut catalog = catalog();
        catalog.carriers.air[1].multiplier = Decimal::ZERO;

        let result = QuoteConfig::new(tariff(), regions(), rate_table(), transit(), catalog);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_lane_with_unknown_region_is_rejected() {
        let mut rates = rate_table();
        rates.lanes[0].destination = "antarctica".to_string();

        let result = QuoteConfig::new(tariff(), regions(), rates, transit(), catalog());
        match result {
            Err(EngineError::InvalidConfig { message }) => assert!(message.contains("antarctica")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_lane_is_rejected() {
        let mut rates = rate_table();
        let duplicate = rates.lanes[0].clone();
        rates.lanes.push(duplicate);

        let result = QuoteConfig::new(tariff(), regions(), rates, transit(), catalog());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_inverted_transit_range_is_rejected() {
        let mut transit = transit();
        transit.services.air.regional = Some(TransitRange {
            min_days: 4,
            max_days: 2,
        });

        let result = QuoteConfig::new(tariff(), regions(), rate_table(), transit, catalog());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_zero_validity_is_rejected() {
        let mut tariff = tariff();
        tariff.quote_validity_days = 0;

        let result = QuoteConfig::new(tariff, regions(), rate_table(), transit(), catalog());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_transit_range_describe() {
        assert_eq!(TransitRange { min_days: 18, max_days: 22 }.describe(), "18-22 days");
        assert_eq!(TransitRange { min_days: 3, max_days: 3 }.describe(), "3 days");
        assert_eq!(TransitRange { min_days: 1, max_days: 1 }.describe(), "1 day");
    }

    #[test]
    fn test_lane_lookup_matches_service_type() {
        let config = create_test_config();
        let table = config.rate_table();

        assert_eq!(
            table.lane("asia", "europe", ServiceType::Sea).unwrap().rate_per_kg,
            dec("0.28")
        );
        assert!(table.lane("asia", "europe", ServiceType::Ground).is_none());
        assert!(table.lane("europe", "asia", ServiceType::Sea).is_none());
    }

    #[test]
    fn test_normalize_cargo_type() {
        assert_eq!(normalize_cargo_type("  High Value "), "high_value");
        assert_eq!(normalize_cargo_type("temperature-controlled"), "temperature_controlled");
    }
}

//! Lane rate lookup functionality.
//!
//! This module determines the per-kilogram rate for a shipment, either from
//! a configured lane or from the service type's default rate.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::QuoteConfig;
use crate::models::ServiceType;

use super::region::resolve_region;

/// Where a per-kilogram rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// A lane matching both regions and the service type.
    Lane,
    /// The service type's default rate.
    ServiceDefault,
}

/// The result of a lane rate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneRateLookupResult {
    /// The per-kilogram rate to charge.
    pub rate_per_kg: Decimal,
    /// Region code the origin resolved to, if any.
    pub origin_region: Option<String>,
    /// Region code the destination resolved to, if any.
    pub destination_region: Option<String>,
    /// Whether a lane matched.
    pub source: RateSource,
}

/// Looks up the per-kilogram rate for a shipment.
///
/// This function resolves both ends to regions and searches the lane table
/// keyed by `(origin_region, destination_region, service_type)`. When either
/// end is unresolved or no lane matches, the service default rate is used
/// and a warning is logged. The lookup never fails.
///
/// # Examples
///
/// ```no_run
/// use freight_quote_engine::calculation::{lookup_lane_rate, RateSource};
/// use freight_quote_engine::config::ConfigLoader;
/// use freight_quote_engine::models::ServiceType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let result = lookup_lane_rate("Shanghai", "Rotterdam", ServiceType::Sea, loader.config());
/// assert_eq!(result.source, RateSource::Lane);
/// ```
pub fn lookup_lane_rate(
    origin: &str,
    destination: &str,
    service_type: ServiceType,
    config: &QuoteConfig,
) -> LaneRateLookupResult {
    let origin_region = resolve_region(origin, config.regions()).map(|r| r.code.clone());
    let destination_region =
        resolve_region(destination, config.regions()).map(|r| r.code.clone());

    let lane = match (&origin_region, &destination_region) {
        (Some(from), Some(to)) => config.rate_table().lane(from, to, service_type),
        _ => None,
    };

    match lane {
        Some(lane) => LaneRateLookupResult {
            rate_per_kg: lane.rate_per_kg,
            origin_region,
            destination_region,
            source: RateSource::Lane,
        },
        None => {
            let rate_per_kg = config
                .rate_table()
                .services
                .get(service_type)
                .default_rate_per_kg;
            warn!(
                origin,
                destination,
                origin_region = origin_region.as_deref().unwrap_or("unresolved"),
                destination_region = destination_region.as_deref().unwrap_or("unresolved"),
                service_type = %service_type,
                rate_per_kg = %rate_per_kg,
                "No lane rate configured, using service default"
            );
            LaneRateLookupResult {
                rate_per_kg,
                origin_region,
                destination_region,
                source: RateSource::ServiceDefault,
            }
        }
    }
}

//! Transit-time estimation.

use crate::config::{QuoteConfig, TransitRange};
use crate::models::ServiceType;

use super::region::{Movement, classify_movement};

/// Selects the transit range for a shipment.
///
/// Regional and intercontinental movements use their own range when the
/// service profile defines one. Everything else falls back to the profile
/// default.
pub fn transit_range(
    origin: &str,
    destination: &str,
    service_type: ServiceType,
    config: &QuoteConfig,
) -> TransitRange {
    let profile = config.transit().services.get(service_type);

    let specific = match classify_movement(origin, destination, config.regions()) {
        Movement::Regional => profile.regional,
        Movement::Intercontinental => profile.intercontinental,
        Movement::Unknown => None,
    };

    specific.unwrap_or(profile.default)
}

/// Estimates the transit time for a shipment as display text.
///
/// # Examples
///
/// ```no_run
/// use freight_quote_engine::calculation::estimate_transit_time;
/// use freight_quote_engine::config::ConfigLoader;
/// use freight_quote_engine::models::ServiceType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let estimate = estimate_transit_time("Shanghai", "Rotterdam", ServiceType::Sea, loader.config());
/// assert_eq!(estimate, "18-22 days");
/// ```
pub fn estimate_transit_time(
    origin: &str,
    destination: &str,
    service_type: ServiceType,
    config: &QuoteConfig,
) -> String {
    transit_range(origin, destination, service_type, config).describe()
}

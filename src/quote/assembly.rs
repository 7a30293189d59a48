//! Quote assembly.

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::calculation::{calculate_shipping_price, estimate_transit_time, generate_carrier_rates};
use crate::config::QuoteConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Quote, QuoteStatus, ShipmentRequest};

/// Generates a quote identifier from the assembly time.
///
/// The identifier is `QT-` followed by the Unix time in milliseconds and
/// eight random hex digits, so two quotes built in the same millisecond
/// still get distinct identifiers.
pub fn generate_quote_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("QT-{}-{}", now.timestamp_millis(), &suffix[..8])
}

/// Assembles a complete quote for a shipment.
///
/// The baseline price and transit estimate are computed once and shared by
/// every carrier rate. The quote and all its rates expire
/// `quote_validity_days` after `now`.
///
/// # Arguments
///
/// * `request` - The shipment to price
/// * `config` - The tariff to price against
/// * `now` - The assembly time
///
/// # Errors
///
/// Propagates pricing errors (`InvalidWeight` under a strict weight policy,
/// `CalculationError` on overflow) and `EmptyCarrierCatalog`.
///
/// # Example
///
/// ```no_run
/// use chrono::Utc;
/// use freight_quote_engine::config::ConfigLoader;
/// use freight_quote_engine::models::{ServiceType, ShipmentRequest};
/// use freight_quote_engine::quote::build_quote;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let request = ShipmentRequest::new("Shanghai", "Rotterdam", "5000 kg", ServiceType::Sea, "general");
///
/// let quote = build_quote(&request, loader.config(), Utc::now()).unwrap();
/// println!("{}: {} carrier rates", quote.quote_id, quote.carrier_rates.len());
/// ```
pub fn build_quote(
    request: &ShipmentRequest,
    config: &QuoteConfig,
    now: DateTime<Utc>,
) -> EngineResult<Quote> {
    let tariff = config.tariff();

    let pricing = calculate_shipping_price(request, config)?;
    let transit_time = estimate_transit_time(
        &request.origin,
        &request.destination,
        request.service_type,
        config,
    );

    let valid_until = now
        .checked_add_signed(Duration::days(i64::from(tariff.quote_validity_days)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "Quote expiry overflowed ({} + {} days)",
                now, tariff.quote_validity_days
            ),
        })?;

    let carrier_rates = generate_carrier_rates(
        &pricing.breakdown,
        request.service_type,
        &transit_time,
        config.catalog(),
        &tariff.currency,
        valid_until,
    )?;

    let quote = Quote {
        quote_id: generate_quote_id(now),
        status: QuoteStatus::Success,
        request: request.clone(),
        breakdown: pricing.breakdown,
        transit_time,
        carrier_rates,
        warnings: pricing.warnings,
        details: None,
        created_at: now,
        valid_until,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    info!(
        quote_id = %quote.quote_id,
        service_type = %request.service_type,
        total = %quote.breakdown.total,
        carrier_count = quote.carrier_rates.len(),
        warning_count = quote.warnings.len(),
        "Quote assembled"
    );

    Ok(quote)
}

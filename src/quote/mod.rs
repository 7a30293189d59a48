//! Quote assembly and storage.
//!
//! This module combines pricing, transit estimation and carrier fan-out into
//! a single [`Quote`](crate::models::Quote), and keeps assembled quotes so
//! they can be listed and fetched again.

mod assembly;
mod clock;
mod store;

pub use assembly::{build_quote, generate_quote_id};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::InMemoryQuoteStore;

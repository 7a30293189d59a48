//! Application state for the Freight Quote Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::quote::{Clock, InMemoryQuoteStore, SystemClock};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded tariff, the quote store and the clock quotes are stamped with.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tariff.
    config: Arc<ConfigLoader>,
    /// Quotes assembled since startup.
    store: Arc<InMemoryQuoteStore>,
    /// Source of quote timestamps.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state using the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(InMemoryQuoteStore::new()),
            clock,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the quote store.
    pub fn store(&self) -> &InMemoryQuoteStore {
        &self.store
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

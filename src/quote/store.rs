//! In-memory quote storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Quote;

/// Thread-safe store of assembled quotes, keyed by quote id.
///
/// Expired quotes are dropped on insert, so the store holds at most the
/// quotes created within one validity window.
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    quotes: RwLock<HashMap<String, Quote>>,
}

impl InMemoryQuoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a quote, replacing any quote with the same id.
    ///
    /// Quotes that have expired as of the new quote's `created_at` are
    /// removed first.
    pub fn insert(&self, quote: Quote) {
        let mut quotes = self.quotes.write().unwrap_or_else(PoisonError::into_inner);

        let before = quotes.len();
        quotes.retain(|_, stored| !stored.is_expired(quote.created_at));
        let pruned = before - quotes.len();
        if pruned > 0 {
            debug!(pruned, remaining = quotes.len(), "Pruned expired quotes");
        }

        quotes.insert(quote.quote_id.clone(), quote);
    }

    /// Fetches a quote by id.
    ///
    /// # Errors
    ///
    /// Returns `QuoteNotFound` when no quote has that id.
    pub fn get(&self, quote_id: &str) -> EngineResult<Quote> {
        let quotes = self.quotes.read().unwrap_or_else(PoisonError::into_inner);
        quotes
            .get(quote_id)
            .cloned()
            .ok_or_else(|| EngineError::QuoteNotFound {
                quote_id: quote_id.to_string(),
            })
    }

    /// Lists stored quotes, newest first.
    ///
    /// When `active_at` is given, quotes that have expired by then are left
    /// out.
    pub fn list(&self, active_at: Option<DateTime<Utc>>) -> Vec<Quote> {
        let quotes = self.quotes.read().unwrap_or_else(PoisonError::into_inner);
        let mut listed: Vec<Quote> = quotes
            .values()
            .filter(|quote| active_at.is_none_or(|now| !quote.is_expired(now)))
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.quote_id.cmp(&a.quote_id))
        });
        listed
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when no quotes are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

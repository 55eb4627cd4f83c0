//! TTL caching quote source.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use desk_core::error::DataError;
use desk_core::traits::QuoteSource;
use desk_core::types::{Lookback, PriceHistory};

struct CachedAt<T> {
    at: Instant,
    value: T,
}

impl<T> CachedAt<T> {
    fn new(value: T) -> Self {
        Self {
            at: Instant::now(),
            value,
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.at.elapsed() < ttl
    }
}

/// TTL memo over another quote source.
///
/// Every refresh tick asks for the same handful of symbols; this wrapper
/// answers repeats from memory until the entry ages out. "No data" is
/// cached like any other answer, so an unavailable symbol is not
/// re-fetched on every tick. Errors are never cached.
pub struct CachedQuoteSource<S> {
    inner: S,
    ttl: Duration,
    name: String,
    prices: Mutex<HashMap<String, CachedAt<Option<f64>>>>,
    histories: Mutex<HashMap<(String, Lookback), CachedAt<PriceHistory>>>,
}

impl<S: QuoteSource> CachedQuoteSource<S> {
    /// Wrap a source with a time-to-live.
    pub fn new(inner: S, ttl: Duration) -> Self {
        let name = format!("cached({})", inner.name());
        Self {
            inner,
            ttl,
            name,
            prices: Mutex::new(HashMap::new()),
            histories: Mutex::new(HashMap::new()),
        }
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.prices.lock().unwrap().clear();
        self.histories.lock().unwrap().clear();
    }
}

impl<S: QuoteSource> QuoteSource for CachedQuoteSource<S> {
    fn last_price(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        let key = symbol.trim().to_uppercase();

        {
            let prices = self.prices.lock().unwrap();
            if let Some(entry) = prices.get(&key) {
                if entry.is_fresh(self.ttl) {
                    debug!(symbol = %key, "price cache hit");
                    return Ok(entry.value);
                }
            }
        }

        let price = self.inner.last_price(&key)?;
        self.prices.lock().unwrap().insert(key, CachedAt::new(price));
        Ok(price)
    }

    fn history(&self, symbol: &str, lookback: Lookback) -> Result<PriceHistory, DataError> {
        let key = (symbol.trim().to_uppercase(), lookback);

        {
            let histories = self.histories.lock().unwrap();
            if let Some(entry) = histories.get(&key) {
                if entry.is_fresh(self.ttl) {
                    debug!(symbol = %key.0, %lookback, "history cache hit");
                    return Ok(entry.value.clone());
                }
            }
        }

        let history = self.inner.history(&key.0, lookback)?;
        self.histories
            .lock()
            .unwrap()
            .insert(key, CachedAt::new(history.clone()));
        Ok(history)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

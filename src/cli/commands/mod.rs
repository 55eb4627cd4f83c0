//! CLI command implementations.

pub mod alerts;
pub mod portfolio;
pub mod signal;
pub mod tick;
pub mod validate;
pub mod watch;
pub mod watchlist;

use anyhow::Result;
use std::time::Duration;

use desk_config::AppConfig;
use desk_core::traits::QuoteSource;
use desk_data::{CachedQuoteSource, CsvQuoteSource};
use tracing::warn;

/// Build the quote source the CLI runs against: per-symbol CSV files
/// under the configured data directory, behind the TTL cache.
fn quote_source(config: &AppConfig) -> Result<CachedQuoteSource<CsvQuoteSource>> {
    let csv = CsvQuoteSource::new(&config.data.csv_dir)?;
    Ok(CachedQuoteSource::new(
        csv,
        Duration::from_secs(config.refresh.cache_ttl_secs),
    ))
}

/// Price lookup over a quote source. Lookup faults degrade to
/// "unavailable" with a warning so one bad symbol never aborts a pass.
fn price_lookup(source: &dyn QuoteSource) -> impl Fn(&str) -> Option<f64> + '_ {
    move |symbol: &str| match source.last_price(symbol) {
        Ok(price) => price,
        Err(err) => {
            warn!(%symbol, %err, "quote lookup failed");
            None
        }
    }
}

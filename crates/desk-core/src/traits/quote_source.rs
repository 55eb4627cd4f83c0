//! Quote source trait definitions.

use crate::error::DataError;
use crate::types::{Lookback, PriceHistory};

/// External provider of price and history data.
///
/// Missing data is a first-class outcome: an unknown symbol yields
/// `Ok(None)` and an empty series, never an error. Errors are reserved
/// for genuine faults in the source itself (unreadable files, malformed
/// records). Timeouts, retries, and caching are implementation
/// concerns, invisible to callers.
pub trait QuoteSource: Send + Sync {
    /// Latest price for a symbol, if the source knows one.
    fn last_price(&self, symbol: &str) -> Result<Option<f64>, DataError>;

    /// Closing-price history for a symbol over the lookback window.
    ///
    /// Unknown symbols yield an empty series.
    fn history(&self, symbol: &str, lookback: Lookback) -> Result<PriceHistory, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}

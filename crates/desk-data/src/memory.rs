//! In-memory quote source for fixtures and tests.

use std::collections::HashMap;

use desk_core::error::DataError;
use desk_core::traits::QuoteSource;
use desk_core::types::{Lookback, PriceHistory};

/// Quote source backed by fixed in-memory data.
#[derive(Debug, Clone, Default)]
pub struct StaticQuoteSource {
    prices: HashMap<String, f64>,
    histories: HashMap<String, PriceHistory>,
}

impl StaticQuoteSource {
    /// Create an empty source: every symbol is unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a last price for a symbol.
    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(symbol.trim().to_uppercase(), price);
        self
    }

    /// Add a history for a symbol. Its latest close also becomes the
    /// symbol's last price unless one was set explicitly.
    pub fn with_history(mut self, history: PriceHistory) -> Self {
        let symbol = history.symbol.trim().to_uppercase();
        if let Some(close) = history.last_close() {
            self.prices.entry(symbol.clone()).or_insert(close);
        }
        self.histories.insert(symbol, history);
        self
    }
}

impl QuoteSource for StaticQuoteSource {
    fn last_price(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        Ok(self.prices.get(&symbol.trim().to_uppercase()).copied())
    }

    fn history(&self, symbol: &str, lookback: Lookback) -> Result<PriceHistory, DataError> {
        let symbol = symbol.trim().to_uppercase();
        match self.histories.get(&symbol) {
            Some(history) => {
                // Window anchored at the newest observation
                let cutoff = history
                    .last()
                    .map(|p| p.timestamp - lookback.as_millis())
                    .unwrap_or(i64::MIN);
                Ok(history.since(cutoff))
            }
            None => Ok(PriceHistory::new(symbol)),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::types::PricePoint;

    #[test]
    fn test_unknown_symbol_is_unavailable_not_an_error() {
        let source = StaticQuoteSource::new();
        assert_eq!(source.last_price("GHOST").unwrap(), None);
        assert!(source.history("GHOST", Lookback::Month3).unwrap().is_empty());
    }

    #[test]
    fn test_history_sets_last_price() {
        let mut history = PriceHistory::new("AAPL");
        history.push(PricePoint::new(1000, 100.0));
        history.push(PricePoint::new(2000, 151.0));

        let source = StaticQuoteSource::new().with_history(history);
        assert_eq!(source.last_price("aapl").unwrap(), Some(151.0));
    }

    #[test]
    fn test_explicit_price_wins_over_history() {
        let mut history = PriceHistory::new("AAPL");
        history.push(PricePoint::new(1000, 100.0));

        let source = StaticQuoteSource::new()
            .with_price("AAPL", 155.0)
            .with_history(history);
        assert_eq!(source.last_price("AAPL").unwrap(), Some(155.0));
    }

    #[test]
    fn test_lookback_trims_history() {
        let day = 86_400_000;
        let history = PriceHistory::from_points(
            "AAPL",
            (0..60).map(|i| PricePoint::new(i * day, 100.0 + i as f64)).collect(),
        );

        let source = StaticQuoteSource::new().with_history(history);
        let week = source.history("AAPL", Lookback::Week1).unwrap();

        // Newest observation at day 59, window reaches back to day 52
        assert_eq!(week.len(), 8);
        assert_eq!(week.get(0).unwrap().timestamp, 52 * day);
    }
}

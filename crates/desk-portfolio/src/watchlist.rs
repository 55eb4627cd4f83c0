//! Watchlist of tracked symbols.

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated list of watched symbols.
///
/// Edits go through explicit commands rather than shared mutable
/// state; the list serializes as a plain sequence of symbol strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    symbols: Vec<String>,
}

/// A watched symbol with its current price, when one is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchQuote {
    /// Symbol
    pub symbol: String,
    /// Current price; None when unavailable
    pub price: Option<f64>,
}

impl Watchlist {
    /// Create an empty watchlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol. Returns false when the symbol is blank or already
    /// present. The symbol is trimmed and uppercased.
    pub fn add(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() || self.symbols.contains(&symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Remove a symbol. Returns false when it was not present.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        let before = self.symbols.len();
        self.symbols.retain(|s| *s != symbol);
        self.symbols.len() != before
    }

    /// Check if a symbol is watched.
    pub fn contains(&self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        self.symbols.contains(&symbol)
    }

    /// Watched symbols in insertion order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of watched symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the watchlist is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the watched symbols.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.symbols.iter()
    }

    /// Current price per watched symbol, unavailable ones included.
    pub fn quotes<F>(&self, mut lookup: F) -> Vec<WatchQuote>
    where
        F: FnMut(&str) -> Option<f64>,
    {
        self.symbols
            .iter()
            .map(|symbol| WatchQuote {
                symbol: symbol.clone(),
                price: lookup(symbol).filter(|p| p.is_finite() && *p > 0.0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_and_dedups() {
        let mut watchlist = Watchlist::new();
        assert!(watchlist.add(" aapl "));
        assert!(!watchlist.add("AAPL"));
        assert!(!watchlist.add("   "));
        assert!(watchlist.add("msft"));

        assert_eq!(watchlist.symbols(), &["AAPL", "MSFT"]);
        assert!(watchlist.contains("aapl"));
    }

    #[test]
    fn test_remove() {
        let mut watchlist = Watchlist::new();
        watchlist.add("AAPL");
        watchlist.add("MSFT");

        assert!(watchlist.remove("aapl"));
        assert!(!watchlist.remove("AAPL"));
        assert_eq!(watchlist.symbols(), &["MSFT"]);
    }

    #[test]
    fn test_quotes_keep_unavailable_symbols() {
        let mut watchlist = Watchlist::new();
        watchlist.add("AAPL");
        watchlist.add("GHOST");

        let quotes = watchlist.quotes(|symbol| (symbol == "AAPL").then_some(151.0));

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].price, Some(151.0));
        assert_eq!(quotes[1].symbol, "GHOST");
        assert_eq!(quotes[1].price, None);
    }

    #[test]
    fn test_quotes_filter_zero_prices() {
        let mut watchlist = Watchlist::new();
        watchlist.add("AAPL");

        let quotes = watchlist.quotes(|_| Some(0.0));
        assert_eq!(quotes[0].price, None);
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let mut watchlist = Watchlist::new();
        watchlist.add("AAPL");
        watchlist.add("SPY");

        let json = serde_json::to_string(&watchlist).unwrap();
        assert_eq!(json, r#"["AAPL","SPY"]"#);

        let restored: Watchlist = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, watchlist);
    }
}

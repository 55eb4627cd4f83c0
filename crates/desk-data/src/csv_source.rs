//! CSV-backed quote source.
//!
//! Reads one CSV file of dated closes per symbol (`<DIR>/<SYMBOL>.csv`).
//! A symbol without a file is unavailable, not an error; the file
//! format faults (unreadable, unparseable) are.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use desk_core::error::DataError;
use desk_core::traits::QuoteSource;
use desk_core::types::{Lookback, PriceHistory, PricePoint};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close", alias = "price")]
    close: f64,
}

/// Quote source reading per-symbol CSV files from a directory.
pub struct CsvQuoteSource {
    dir: PathBuf,
}

impl CsvQuoteSource {
    /// Create a source over a data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(DataError::Internal(format!(
                "data directory not found: {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    fn symbol_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.trim().to_uppercase()))
    }

    /// Load the full series for a symbol; empty when no file exists.
    fn load(&self, symbol: &str) -> Result<PriceHistory, DataError> {
        let symbol = symbol.trim().to_uppercase();
        let path = self.symbol_path(&symbol);
        if !path.exists() {
            return Ok(PriceHistory::new(symbol));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut points = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            points.push(PricePoint::new(parse_timestamp(&record.date)?, record.close));
        }

        // from_points sorts and drops duplicate dates
        Ok(PriceHistory::from_points(symbol, points))
    }
}

impl QuoteSource for CsvQuoteSource {
    fn last_price(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        Ok(self.load(symbol)?.last_close())
    }

    fn history(&self, symbol: &str, lookback: Lookback) -> Result<PriceHistory, DataError> {
        let history = self.load(symbol)?;
        // Window anchored at the newest observation so offline data
        // files stay usable regardless of wall-clock time
        let cutoff = match history.last() {
            Some(last) => last.timestamp - lookback.as_millis(),
            None => return Ok(history),
        };
        Ok(history.since(cutoff))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the timestamp formats market data exports use.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d", "%m/%d/%Y"];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp_millis());
            }
        }
    }

    // Unix timestamps, assume milliseconds when > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        }
        return Ok(ts * 1000);
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}

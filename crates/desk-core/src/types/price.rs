//! Closing-price series types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(timestamp: i64, close: f64) -> Self {
        Self { timestamp, close }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Chronological closing-price series for one symbol.
///
/// Timestamps are strictly increasing; out-of-order or duplicate
/// observations are dropped on push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Symbol identifier
    pub symbol: String,
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Create a new empty series.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            points: Vec::new(),
        }
    }

    /// Build a series from unordered points.
    ///
    /// Points are sorted by timestamp; for duplicate timestamps the
    /// last observation wins.
    pub fn from_points(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        points.dedup_by(|cur, kept| {
            if cur.timestamp == kept.timestamp {
                *kept = *cur;
                true
            } else {
                false
            }
        });
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    /// Append an observation. Returns false (and drops the point) when
    /// its timestamp does not advance the series.
    pub fn push(&mut self, point: PricePoint) -> bool {
        if let Some(last) = self.points.last() {
            if point.timestamp <= last.timestamp {
                return false;
            }
        }
        self.points.push(point);
        true
    }

    /// Append multiple observations.
    pub fn extend(&mut self, points: impl IntoIterator<Item = PricePoint>) {
        for point in points {
            self.push(point);
        }
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations, oldest first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// The most recent observation.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Get an observation by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    /// Extract closing prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// The most recent close.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// The sub-series at or after the cutoff timestamp.
    pub fn since(&self, cutoff_ms: i64) -> PriceHistory {
        let start = self.points.partition_point(|p| p.timestamp < cutoff_ms);
        Self {
            symbol: self.symbol.clone(),
            points: self.points[start..].to_vec(),
        }
    }

    /// Iterate over the observations.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }
}

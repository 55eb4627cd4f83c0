//! Trading signal types.
//!
//! Signals are derived values: recomputed on demand from a price
//! series, never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::Hold => "HOLD",
        };
        write!(f, "{}", s)
    }
}

/// The values a signal was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalReading {
    /// Latest close
    pub price: f64,
    /// Short-window moving average
    pub short_ma: f64,
    /// Long-window moving average, absent under the short-average policy
    pub long_ma: Option<f64>,
}

/// Outcome of a signal computation.
///
/// `NotAvailable` is a valid terminal result for series shorter than
/// the required window, not an error, and carries no reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    NotAvailable,
    Ready {
        kind: SignalKind,
        reading: SignalReading,
    },
}

impl Signal {
    /// The action, when one is available.
    pub fn kind(&self) -> Option<SignalKind> {
        match self {
            Signal::NotAvailable => None,
            Signal::Ready { kind, .. } => Some(*kind),
        }
    }

    /// The values the signal was computed from, when available.
    pub fn reading(&self) -> Option<SignalReading> {
        match self {
            Signal::NotAvailable => None,
            Signal::Ready { reading, .. } => Some(*reading),
        }
    }

    /// Check if the signal carries an action.
    pub fn is_available(&self) -> bool {
        matches!(self, Signal::Ready { .. })
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::NotAvailable => write!(f, "N/A"),
            Signal::Ready { kind, reading } => write!(f, "{} @ {:.2}", kind, reading.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_carries_nothing() {
        let signal = Signal::NotAvailable;
        assert!(!signal.is_available());
        assert_eq!(signal.kind(), None);
        assert_eq!(signal.reading(), None);
        assert_eq!(signal.to_string(), "N/A");
    }

    #[test]
    fn test_ready_accessors() {
        let signal = Signal::Ready {
            kind: SignalKind::Buy,
            reading: SignalReading {
                price: 151.2,
                short_ma: 148.0,
                long_ma: Some(145.5),
            },
        };
        assert_eq!(signal.kind(), Some(SignalKind::Buy));
        assert_eq!(signal.reading().unwrap().long_ma, Some(145.5));
        assert_eq!(signal.to_string(), "BUY @ 151.20");
    }
}

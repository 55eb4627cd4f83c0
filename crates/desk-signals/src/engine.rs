//! Signal computation.
//!
//! Compares the latest close against trailing moving averages and
//! produces a Buy/Sell/Hold verdict. A series shorter than the policy's
//! window produces `Signal::NotAvailable` rather than an error.

use serde::{Deserialize, Serialize};

use crate::Sma;
use desk_core::error::SignalError;
use desk_core::types::{PriceHistory, Signal, SignalKind, SignalReading};

/// Configuration for the signal engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Short moving average period
    pub short_period: usize,
    /// Long moving average period
    pub long_period: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            short_period: 10,
            long_period: 30,
        }
    }
}

impl SignalConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.short_period == 0 {
            return Err(SignalError::InvalidConfig(
                "Short period must be greater than 0".into(),
            ));
        }
        if self.short_period >= self.long_period {
            return Err(SignalError::InvalidConfig(
                "Short period must be less than long period".into(),
            ));
        }
        Ok(())
    }
}

/// Which comparison the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolicy {
    /// Price vs. short and long average. Buy only when the price sits
    /// above the short average and the short sits above the long.
    DualAverage,
    /// Price vs. short average only: above is Buy, everything else
    /// Sell. Usable when only a short window of data exists.
    ShortAverage,
}

/// Moving-average signal engine.
///
/// Pure: computing a signal never mutates the history or any other
/// state, and identical input yields an identical signal.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    config: SignalConfig,
}

impl SignalEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: SignalConfig) -> Result<Self, SignalError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Compute a signal under the dual-average policy.
    pub fn compute(&self, history: &PriceHistory) -> Signal {
        self.compute_with(SignalPolicy::DualAverage, history)
    }

    /// Compute a signal under an explicit policy.
    pub fn compute_with(&self, policy: SignalPolicy, history: &PriceHistory) -> Signal {
        let closes = history.closes();
        match policy {
            SignalPolicy::DualAverage => self.dual_average(&closes),
            SignalPolicy::ShortAverage => self.short_average(&closes),
        }
    }

    fn dual_average(&self, closes: &[f64]) -> Signal {
        if closes.len() < self.config.long_period {
            return Signal::NotAvailable;
        }

        let short = Sma::new(self.config.short_period);
        let long = Sma::new(self.config.long_period);
        let (Some(short_ma), Some(long_ma)) = (short.latest(closes), long.latest(closes)) else {
            return Signal::NotAvailable;
        };
        // Trailing windows end at the same most recent point; the
        // latest close is the price under test.
        let price = closes[closes.len() - 1];

        // Exact equality never produces Buy; ties fall through to the
        // Sell/Hold check.
        let kind = if price > short_ma && short_ma > long_ma {
            SignalKind::Buy
        } else if price < long_ma {
            SignalKind::Sell
        } else {
            SignalKind::Hold
        };

        Signal::Ready {
            kind,
            reading: SignalReading {
                price,
                short_ma,
                long_ma: Some(long_ma),
            },
        }
    }

    fn short_average(&self, closes: &[f64]) -> Signal {
        let short = Sma::new(self.config.short_period);
        let Some(short_ma) = short.latest(closes) else {
            return Signal::NotAvailable;
        };
        let price = closes[closes.len() - 1];

        let kind = if price > short_ma {
            SignalKind::Buy
        } else {
            SignalKind::Sell
        };

        Signal::Ready {
            kind,
            reading: SignalReading {
                price,
                short_ma,
                long_ma: None,
            },
        }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self {
            config: SignalConfig::default(),
        }
    }
}

/// Compute a dual-average signal with the default 10/30 windows.
pub fn compute_signal(history: &PriceHistory) -> Signal {
    SignalEngine::default().compute(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::types::PricePoint;

    fn history(closes: &[f64]) -> PriceHistory {
        PriceHistory::from_points(
            "TEST",
            closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint::new(i as i64 * 86_400_000, close))
                .collect(),
        )
    }

    #[test]
    fn test_config_validation() {
        assert!(SignalConfig::default().validate().is_ok());

        let zero_short = SignalConfig {
            short_period: 0,
            long_period: 30,
        };
        assert!(zero_short.validate().is_err());

        let inverted = SignalConfig {
            short_period: 30,
            long_period: 10,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_short_history_is_not_available() {
        for len in [0, 1, 10, 29] {
            let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let signal = compute_signal(&history(&closes));
            assert_eq!(signal, Signal::NotAvailable, "length {}", len);
        }
    }

    #[test]
    fn test_thirty_points_is_enough() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        assert!(compute_signal(&history(&closes)).is_available());
    }

    #[test]
    fn test_constant_series_holds_on_ties() {
        // short MA == long MA == price: equality must not produce Buy
        let signal = compute_signal(&history(&[100.0; 40]));
        assert_eq!(signal.kind(), Some(SignalKind::Hold));

        let reading = signal.reading().unwrap();
        assert!((reading.short_ma - 100.0).abs() < 1e-10);
        assert!((reading.long_ma.unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_uptrend_buys() {
        // Rising then flattening high: price above short MA above long MA
        let mut closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        closes.extend([130.5, 131.0, 132.0, 133.5, 135.0]);

        let signal = compute_signal(&history(&closes));
        assert_eq!(signal.kind(), Some(SignalKind::Buy));

        let reading = signal.reading().unwrap();
        assert!(reading.price > reading.short_ma);
        assert!(reading.short_ma > reading.long_ma.unwrap());
    }

    #[test]
    fn test_downtrend_sells() {
        let closes: Vec<f64> = (0..35).map(|i| 200.0 - i as f64).collect();
        let signal = compute_signal(&history(&closes));
        assert_eq!(signal.kind(), Some(SignalKind::Sell));
    }

    #[test]
    fn test_price_equal_to_short_ma_is_not_buy() {
        // 20 closes at 10 then 10 at 20: price == short MA exactly,
        // both above the long MA
        let mut closes = vec![10.0; 20];
        closes.extend([20.0; 10]);

        let signal = compute_signal(&history(&closes));
        let reading = signal.reading().unwrap();
        assert!((reading.price - reading.short_ma).abs() < 1e-10);
        assert_eq!(signal.kind(), Some(SignalKind::Hold));
    }

    #[test]
    fn test_deterministic() {
        let closes: Vec<f64> = (0..45).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let series = history(&closes);
        assert_eq!(compute_signal(&series), compute_signal(&series));
    }

    #[test]
    fn test_short_average_policy() {
        let engine = SignalEngine::default();

        // Ten points suffice under the short policy
        let mut closes = vec![100.0; 9];
        closes.push(110.0);
        let series = history(&closes);

        assert_eq!(engine.compute(&series), Signal::NotAvailable);

        let signal = engine.compute_with(SignalPolicy::ShortAverage, &series);
        assert_eq!(signal.kind(), Some(SignalKind::Buy));
        assert_eq!(signal.reading().unwrap().long_ma, None);

        // At or below the short average is Sell
        let flat = engine.compute_with(SignalPolicy::ShortAverage, &history(&[100.0; 10]));
        assert_eq!(flat.kind(), Some(SignalKind::Sell));

        // Nine points are still too few
        let short = engine.compute_with(SignalPolicy::ShortAverage, &history(&[100.0; 9]));
        assert_eq!(short, Signal::NotAvailable);
    }
}

//! Price alert types.

use crate::error::AlertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the target a price must reach to satisfy an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    /// Trigger once the price is at or above the target.
    #[default]
    Above,
    /// Trigger once the price is at or below the target.
    Below,
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertDirection::Above => "above",
            AlertDirection::Below => "below",
        };
        write!(f, "{}", s)
    }
}

/// A one-shot price alert for a single symbol.
///
/// `hit` only ever flips false -> true. A triggered rule stays
/// triggered until it is replaced or explicitly reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    /// Symbol, uppercase
    pub symbol: String,
    /// Target price
    pub target: f64,
    /// Older alert files carry no direction field; those load as Above.
    #[serde(default)]
    pub direction: AlertDirection,
    /// Whether the alert has already fired
    #[serde(default)]
    pub hit: bool,
}

impl AlertRule {
    /// Create a validated rule. The symbol is trimmed and uppercased.
    pub fn new(symbol: &str, target: f64, direction: AlertDirection) -> Result<Self, AlertError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(AlertError::EmptySymbol);
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(AlertError::InvalidTarget { target });
        }
        Ok(Self {
            symbol,
            target,
            direction,
            hit: false,
        })
    }

    /// Whether this rule passes creation-time validation.
    ///
    /// Persisted state can carry entries that do not; evaluation skips
    /// them rather than failing.
    pub fn is_well_formed(&self) -> bool {
        !self.symbol.trim().is_empty() && self.target.is_finite() && self.target > 0.0
    }

    /// Threshold-cross check: at or beyond the target counts.
    pub fn is_satisfied_by(&self, price: f64) -> bool {
        match self.direction {
            AlertDirection::Above => price >= self.target,
            AlertDirection::Below => price <= self.target,
        }
    }
}

/// One-time notification that an alert condition was satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Symbol of the triggered rule
    pub symbol: String,
    /// Price observed at trigger time
    pub price: f64,
    /// Target the rule was armed with
    pub target: f64,
    /// Direction the rule was armed with
    pub direction: AlertDirection,
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} crossed {} target {:.2} at {:.2}",
            self.symbol, self.direction, self.target, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_symbol() {
        let rule = AlertRule::new(" aapl ", 150.0, AlertDirection::Above).unwrap();
        assert_eq!(rule.symbol, "AAPL");
        assert!(!rule.hit);
        assert!(rule.is_well_formed());
    }

    #[test]
    fn test_new_rejects_invalid_rules() {
        assert!(matches!(
            AlertRule::new("  ", 150.0, AlertDirection::Above),
            Err(AlertError::EmptySymbol)
        ));
        assert!(matches!(
            AlertRule::new("AAPL", 0.0, AlertDirection::Above),
            Err(AlertError::InvalidTarget { .. })
        ));
        assert!(matches!(
            AlertRule::new("AAPL", -5.0, AlertDirection::Below),
            Err(AlertError::InvalidTarget { .. })
        ));
        assert!(matches!(
            AlertRule::new("AAPL", f64::NAN, AlertDirection::Above),
            Err(AlertError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_threshold_cross_includes_equality() {
        let above = AlertRule::new("AAPL", 150.0, AlertDirection::Above).unwrap();
        assert!(above.is_satisfied_by(150.0));
        assert!(above.is_satisfied_by(151.0));
        assert!(!above.is_satisfied_by(149.99));

        let below = AlertRule::new("AAPL", 150.0, AlertDirection::Below).unwrap();
        assert!(below.is_satisfied_by(150.0));
        assert!(below.is_satisfied_by(148.0));
        assert!(!below.is_satisfied_by(150.01));
    }

    #[test]
    fn test_legacy_json_defaults_to_above() {
        let rule: AlertRule = serde_json::from_str(r#"{"symbol":"TSLA","target":200.0}"#).unwrap();
        assert_eq!(rule.direction, AlertDirection::Above);
        assert!(!rule.hit);
    }

    #[test]
    fn test_trigger_event_display() {
        let event = TriggerEvent {
            symbol: "AAPL".to_string(),
            price: 151.0,
            target: 150.0,
            direction: AlertDirection::Above,
        };
        assert_eq!(event.to_string(), "AAPL crossed above target 150.00 at 151.00");
    }
}

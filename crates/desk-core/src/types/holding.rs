//! Portfolio holding type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HoldingError;

/// A position in the tracked portfolio.
///
/// Quantity and cost basis are non-negative; the portfolio has no
/// short side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Symbol, uppercase
    pub symbol: String,
    /// Number of shares; older files call this field `shares`
    #[serde(alias = "shares")]
    pub quantity: Decimal,
    /// Cost basis per share
    #[serde(rename = "cost")]
    pub cost_basis: Decimal,
}

impl Holding {
    /// Create a validated holding. The symbol is trimmed and uppercased.
    pub fn new(symbol: &str, quantity: Decimal, cost_basis: Decimal) -> Result<Self, HoldingError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(HoldingError::EmptySymbol);
        }
        if quantity < Decimal::ZERO {
            return Err(HoldingError::NegativeQuantity { quantity });
        }
        if cost_basis < Decimal::ZERO {
            return Err(HoldingError::NegativeCost { cost: cost_basis });
        }
        Ok(Self {
            symbol,
            quantity,
            cost_basis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_normalizes_symbol() {
        let holding = Holding::new(" msft ", dec!(10), dec!(250.50)).unwrap();
        assert_eq!(holding.symbol, "MSFT");
        assert_eq!(holding.quantity, dec!(10));
    }

    #[test]
    fn test_new_rejects_invalid_holdings() {
        assert!(matches!(
            Holding::new("  ", dec!(10), dec!(100)),
            Err(HoldingError::EmptySymbol)
        ));
        assert!(matches!(
            Holding::new("AAPL", dec!(-1), dec!(100)),
            Err(HoldingError::NegativeQuantity { .. })
        ));
        assert!(matches!(
            Holding::new("AAPL", dec!(10), dec!(-0.01)),
            Err(HoldingError::NegativeCost { .. })
        ));
        // Zero is allowed on both sides
        assert!(Holding::new("AAPL", dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn test_stable_field_names() {
        let holding = Holding::new("AAPL", dec!(10), dec!(100)).unwrap();
        let json = serde_json::to_value(&holding).unwrap();
        assert!(json.get("quantity").is_some());
        assert!(json.get("cost").is_some());
        assert!(json.get("cost_basis").is_none());
    }

    #[test]
    fn test_accepts_legacy_shares_field() {
        let holding: Holding =
            serde_json::from_str(r#"{"symbol":"AAPL","shares":"10","cost":"100"}"#).unwrap();
        assert_eq!(holding.quantity, dec!(10));
        assert_eq!(holding.cost_basis, dec!(100));
    }
}

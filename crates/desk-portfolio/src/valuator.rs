//! Holdings valuation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use desk_core::types::Holding;

/// Valuation of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValue {
    /// Symbol
    pub symbol: String,
    /// price * quantity; None when the price is unavailable
    pub market_value: Option<Decimal>,
    /// (price - cost basis) * quantity; None when the price is unavailable
    pub pnl: Option<Decimal>,
}

/// Valuation of a whole portfolio.
///
/// Totals sum holdings with a known price only; unpriced holdings are
/// still listed per-holding so the caller can surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Per-holding breakdown, in portfolio order
    pub holdings: Vec<HoldingValue>,
    /// Sum of known market values
    pub total_value: Decimal,
    /// Sum of known profit/loss
    pub total_pnl: Decimal,
}

impl PortfolioValuation {
    /// Number of holdings that could not be priced.
    pub fn unpriced_count(&self) -> usize {
        self.holdings.iter().filter(|h| h.market_value.is_none()).count()
    }
}

/// Value holdings against current prices.
///
/// No rounding is applied; formatting is the caller's concern.
pub fn value<F>(holdings: &[Holding], mut lookup: F) -> PortfolioValuation
where
    F: FnMut(&str) -> Option<f64>,
{
    let mut per_holding = Vec::with_capacity(holdings.len());
    let mut total_value = Decimal::ZERO;
    let mut total_pnl = Decimal::ZERO;

    for holding in holdings {
        match known_price(lookup(&holding.symbol)) {
            Some(price) => {
                let market_value = price * holding.quantity;
                let pnl = (price - holding.cost_basis) * holding.quantity;
                total_value += market_value;
                total_pnl += pnl;
                per_holding.push(HoldingValue {
                    symbol: holding.symbol.clone(),
                    market_value: Some(market_value),
                    pnl: Some(pnl),
                });
            }
            None => per_holding.push(HoldingValue {
                symbol: holding.symbol.clone(),
                market_value: None,
                pnl: None,
            }),
        }
    }

    PortfolioValuation {
        holdings: per_holding,
        total_value,
        total_pnl,
    }
}

/// A usable quote price. Zero and non-finite values mean "no data",
/// not a price.
fn known_price(price: Option<f64>) -> Option<Decimal> {
    let price = price?;
    if !price.is_finite() || price <= 0.0 {
        return None;
    }
    Decimal::try_from(price).ok()
}

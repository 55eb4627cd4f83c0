//! Refresh tick command.

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use desk_config::{load_config, AppConfig};
use desk_core::traits::QuoteSource;
use desk_core::types::PriceHistory;
use desk_signals::SignalEngine;
use desk_store::{SessionState, StateStore};

use super::{price_lookup, quote_source};

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = StateStore::new(&config.data.state_dir);
    let mut state = store.load()?;
    let source = quote_source(&config)?;

    pass(&mut state, &source, &config)?;

    store.save(&state)?;
    Ok(())
}

/// One refresh pass: evaluate alerts, then report watchlist quotes,
/// signals, and the portfolio valuation.
pub(crate) fn pass(
    state: &mut SessionState,
    source: &dyn QuoteSource,
    config: &AppConfig,
) -> Result<()> {
    let lookup = price_lookup(source);

    for event in state.alerts.evaluate(&lookup) {
        info!(symbol = %event.symbol, price = event.price, "price alert triggered");
        println!("ALERT: {}", event);
    }

    if !state.watchlist.is_empty() {
        let engine = SignalEngine::new(config.signals.clone())?;
        println!("Watchlist");
        for quote in state.watchlist.quotes(&lookup) {
            let history = match source.history(&quote.symbol, config.refresh.lookback) {
                Ok(history) => history,
                Err(err) => {
                    warn!(symbol = %quote.symbol, %err, "history fetch failed");
                    PriceHistory::new(quote.symbol.clone())
                }
            };
            let price = match quote.price {
                Some(price) => format!("${:.2}", price),
                None => "N/A".to_string(),
            };
            let change = match percent_change(&history) {
                Some(pct) => format!("{:+.2}%", pct),
                None => "--".to_string(),
            };
            println!(
                "  {:<6} {:>10} {:>8}  {}",
                quote.symbol,
                price,
                change,
                engine.compute(&history)
            );
        }
    }

    if !state.portfolio.is_empty() {
        let valuation = desk_portfolio::value(&state.portfolio, &lookup);
        println!("Portfolio");
        for holding in &valuation.holdings {
            match (&holding.market_value, &holding.pnl) {
                (Some(value), Some(pnl)) => {
                    println!("  {:<6} ${} (PnL: {})", holding.symbol, value, pnl)
                }
                _ => println!("  {:<6} N/A", holding.symbol),
            }
        }
        println!(
            "  Total: ${} (PnL: {})",
            valuation.total_value, valuation.total_pnl
        );
        if valuation.unpriced_count() > 0 {
            println!("  ({} holdings without a price)", valuation.unpriced_count());
        }
    }

    Ok(())
}

/// Change of the latest close against the one before it, as a
/// percentage.
fn percent_change(history: &PriceHistory) -> Option<f64> {
    let [.., prev, last] = history.points() else {
        return None;
    };
    (prev.close > 0.0).then(|| (last.close - prev.close) / prev.close * 100.0)
}

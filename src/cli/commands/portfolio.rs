//! Portfolio command.

use anyhow::Result;
use std::path::Path;

use desk_config::load_config;
use desk_core::types::Holding;
use desk_store::StateStore;

use super::{price_lookup, quote_source};
use crate::cli::{PortfolioAction, PortfolioArgs};

pub async fn run(args: PortfolioArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = StateStore::new(&config.data.state_dir);
    let mut state = store.load()?;

    match args.action {
        Some(PortfolioAction::Add {
            symbol,
            quantity,
            cost,
        }) => {
            let holding = Holding::new(&symbol, quantity, cost)?;
            println!(
                "Added {} x{} @ ${}",
                holding.symbol, holding.quantity, holding.cost_basis
            );
            state.portfolio.push(holding);
            store.save(&state)?;
        }
        Some(PortfolioAction::Remove { symbol }) => {
            let symbol = symbol.trim().to_uppercase();
            let before = state.portfolio.len();
            state.portfolio.retain(|h| h.symbol != symbol);
            if state.portfolio.len() == before {
                println!("No holdings for {}", symbol);
            } else {
                store.save(&state)?;
                println!("Removed {}", symbol);
            }
        }
        None => {
            if state.portfolio.is_empty() {
                println!("Portfolio is empty.");
                return Ok(());
            }
            let source = quote_source(&config)?;
            let valuation = desk_portfolio::value(&state.portfolio, price_lookup(&source));

            for holding in &valuation.holdings {
                match (&holding.market_value, &holding.pnl) {
                    (Some(value), Some(pnl)) => {
                        println!("{:<6} ${} (PnL: {})", holding.symbol, value, pnl)
                    }
                    _ => println!("{:<6} N/A", holding.symbol),
                }
            }
            println!(
                "Total: ${} (PnL: {})",
                valuation.total_value, valuation.total_pnl
            );
        }
    }

    Ok(())
}

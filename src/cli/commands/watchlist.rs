//! Watchlist command.

use anyhow::Result;
use std::path::Path;

use desk_config::load_config;
use desk_store::StateStore;

use super::{price_lookup, quote_source};
use crate::cli::{WatchlistAction, WatchlistArgs};

pub async fn run(args: WatchlistArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = StateStore::new(&config.data.state_dir);
    let mut state = store.load()?;

    match args.action {
        Some(WatchlistAction::Add { symbol }) => {
            if state.watchlist.add(&symbol) {
                store.save(&state)?;
                println!("Watching {}", symbol.trim().to_uppercase());
            } else {
                println!("{} is already watched (or blank)", symbol.trim());
            }
        }
        Some(WatchlistAction::Remove { symbol }) => {
            if state.watchlist.remove(&symbol) {
                store.save(&state)?;
                println!("Stopped watching {}", symbol.trim().to_uppercase());
            } else {
                println!("{} is not on the watchlist", symbol.trim());
            }
        }
        None => {
            if state.watchlist.is_empty() {
                println!("Watchlist is empty.");
                return Ok(());
            }
            let source = quote_source(&config)?;
            for quote in state.watchlist.quotes(price_lookup(&source)) {
                match quote.price {
                    Some(price) => println!("{:<6} ${:.2}", quote.symbol, price),
                    None => println!("{:<6} N/A", quote.symbol),
                }
            }
        }
    }

    Ok(())
}

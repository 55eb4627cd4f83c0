//! Price alert command.

use anyhow::Result;
use std::path::Path;

use desk_config::load_config;
use desk_core::types::AlertRule;
use desk_store::StateStore;

use crate::cli::{AlertAction, AlertsArgs};

pub async fn run(args: AlertsArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = StateStore::new(&config.data.state_dir);
    let mut state = store.load()?;

    match args.action {
        Some(AlertAction::Set {
            symbol,
            target,
            direction,
        }) => {
            let rule = AlertRule::new(&symbol, target, direction.into())?;
            println!("Alert set: {} {} {:.2}", rule.symbol, rule.direction, rule.target);
            state.alerts.set(rule);
            store.save(&state)?;
        }
        Some(AlertAction::Clear { symbol }) => {
            let symbol = symbol.trim().to_uppercase();
            match state.alerts.remove(&symbol) {
                Some(rule) => {
                    store.save(&state)?;
                    println!("Cleared alert for {}", rule.symbol);
                }
                None => println!("No alert for {}", symbol),
            }
        }
        Some(AlertAction::Reset { symbol }) => {
            let symbol = symbol.trim().to_uppercase();
            if state.alerts.reset(&symbol) {
                store.save(&state)?;
                println!("Re-armed alert for {}", symbol);
            } else {
                println!("No alert for {}", symbol);
            }
        }
        None => {
            if state.alerts.is_empty() {
                println!("No alerts configured.");
                return Ok(());
            }
            for rule in state.alerts.iter() {
                let status = if rule.hit { "hit" } else { "armed" };
                println!(
                    "{:<6} {:<5} {:>10.2}  [{}]",
                    rule.symbol, rule.direction, rule.target, status
                );
            }
        }
    }

    Ok(())
}

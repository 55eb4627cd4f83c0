//! Signal computation command.

use anyhow::Result;
use std::path::Path;

use desk_config::load_config;
use desk_core::traits::QuoteSource;
use desk_core::types::Signal;
use desk_signals::{SignalEngine, SignalPolicy};

use super::quote_source;
use crate::cli::SignalArgs;

pub async fn run(args: SignalArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = quote_source(&config)?;

    let symbol = args.symbol.trim().to_uppercase();
    let lookback = args.lookback.unwrap_or(config.refresh.lookback);

    let history = source.history(&symbol, lookback)?;
    let engine = SignalEngine::new(config.signals.clone())?;

    println!("{} ({} observations over {})", symbol, history.len(), lookback);

    print_signal(
        "dual-average",
        engine.compute(&history),
        config.signals.long_period,
    );
    print_signal(
        "short-average",
        engine.compute_with(SignalPolicy::ShortAverage, &history),
        config.signals.short_period,
    );

    Ok(())
}

fn print_signal(label: &str, signal: Signal, required: usize) {
    match signal {
        Signal::Ready { kind, reading } => {
            let long = reading
                .long_ma
                .map(|ma| format!(", long MA {:.2}", ma))
                .unwrap_or_default();
            println!(
                "  {:<14} {} (price {:.2}, short MA {:.2}{})",
                label, kind, reading.price, reading.short_ma, long
            );
        }
        Signal::NotAvailable => {
            println!("  {:<14} N/A (need {} observations)", label, required)
        }
    }
}

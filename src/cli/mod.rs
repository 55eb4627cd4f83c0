//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use desk_core::types::{AlertDirection, Lookback};

#[derive(Parser)]
#[command(name = "marketdesk")]
#[command(author, version, about = "Market dashboard core: signals, price alerts, portfolio")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured one)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one refresh pass: evaluate alerts, report quotes and P&L
    Tick,
    /// Run refresh passes on an interval
    Watch(WatchArgs),
    /// Compute trading signals for a symbol
    Signal(SignalArgs),
    /// Show or edit the portfolio
    Portfolio(PortfolioArgs),
    /// Show or edit price alerts
    Alerts(AlertsArgs),
    /// Show or edit the watchlist
    Watchlist(WatchlistArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Seconds between passes (defaults to the configured interval)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

#[derive(clap::Args)]
pub struct SignalArgs {
    /// Symbol to analyze
    pub symbol: String,

    /// History window (1w, 1mo, 3mo, 6mo, 1y)
    #[arg(short = 'L', long)]
    pub lookback: Option<Lookback>,
}

#[derive(clap::Args)]
pub struct PortfolioArgs {
    #[command(subcommand)]
    pub action: Option<PortfolioAction>,
}

#[derive(Subcommand)]
pub enum PortfolioAction {
    /// Add a holding
    Add {
        /// Symbol
        symbol: String,
        /// Number of shares
        quantity: Decimal,
        /// Cost basis per share
        cost: Decimal,
    },
    /// Remove all holdings for a symbol
    Remove {
        /// Symbol
        symbol: String,
    },
}

#[derive(clap::Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub action: Option<AlertAction>,
}

#[derive(Subcommand)]
pub enum AlertAction {
    /// Arm or replace a price alert
    Set {
        /// Symbol
        symbol: String,
        /// Target price
        target: f64,
        /// Which side of the target triggers
        #[arg(short, long, default_value = "above")]
        direction: DirectionArg,
    },
    /// Remove an alert
    Clear {
        /// Symbol
        symbol: String,
    },
    /// Re-arm a triggered alert
    Reset {
        /// Symbol
        symbol: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Above,
    Below,
}

impl From<DirectionArg> for AlertDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Above => AlertDirection::Above,
            DirectionArg::Below => AlertDirection::Below,
        }
    }
}

#[derive(clap::Args)]
pub struct WatchlistArgs {
    #[command(subcommand)]
    pub action: Option<WatchlistAction>,
}

#[derive(Subcommand)]
pub enum WatchlistAction {
    /// Add a symbol to the watchlist
    Add {
        /// Symbol
        symbol: String,
    },
    /// Remove a symbol from the watchlist
    Remove {
        /// Symbol
        symbol: String,
    },
}

//! Market dashboard CLI application.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use desk_config::load_config;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes up before anything else; a broken config file
    // falls back to default logging so validate-config can still
    // report what is wrong with it.
    let logging_config = load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    let level_override = cli.log_level.map(|level| match level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    });
    setup_logging(&logging_config, level_override, cli.json_logs);

    // Execute command
    match cli.command {
        Commands::Tick => cli::commands::tick::run(&cli.config).await,
        Commands::Watch(args) => cli::commands::watch::run(args, &cli.config).await,
        Commands::Signal(args) => cli::commands::signal::run(args, &cli.config).await,
        Commands::Portfolio(args) => cli::commands::portfolio::run(args, &cli.config).await,
        Commands::Alerts(args) => cli::commands::alerts::run(args, &cli.config).await,
        Commands::Watchlist(args) => cli::commands::watchlist::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}

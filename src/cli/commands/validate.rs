//! Validate configuration command.

use anyhow::Result;
use std::path::Path;

use desk_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            config.signals.validate()?;
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Refresh interval: {}s", config.refresh.interval_secs);
            println!("Quote cache TTL: {}s", config.refresh.cache_ttl_secs);
            println!("Signal lookback: {}", config.refresh.lookback);
            println!(
                "Signal windows: {}/{}",
                config.signals.short_period, config.signals.long_period
            );
            println!("State dir: {}", config.data.state_dir.display());
            println!("Quote data dir: {}", config.data.csv_dir.display());
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

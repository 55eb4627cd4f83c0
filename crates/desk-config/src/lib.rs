//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig, RefreshSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// A missing file falls back to defaults; `MARKETDESK__`-prefixed
/// environment variables override either.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("MARKETDESK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

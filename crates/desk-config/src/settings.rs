//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use desk_core::types::Lookback;
use desk_signals::SignalConfig;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub signals: SignalConfig,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "marketdesk".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Refresh tick settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSettings {
    /// Seconds between ticks in watch mode
    pub interval_secs: u64,
    /// Quote cache time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// History window requested for signal computation
    pub lookback: Lookback,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            cache_ttl_secs: 60,
            lookback: Lookback::Month3,
        }
    }
}

/// Data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory holding the persisted session state
    pub state_dir: PathBuf,
    /// Directory holding per-symbol CSV quote files
    pub csv_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("state"),
            csv_dir: PathBuf::from("data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "marketdesk");
        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.refresh.lookback, Lookback::Month3);
        assert_eq!(config.signals.short_period, 10);
        assert_eq!(config.signals.long_period, 30);
        assert!(config.signals.validate().is_ok());
    }
}

//! Logging setup.

use desk_config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing from the logging section of the app config.
///
/// CLI flags win over the file: an explicit `--log-level` replaces the
/// configured level and `--json-logs` forces the JSON format. `RUST_LOG`
/// still overrides the level filter entirely.
pub fn setup_logging(config: &LoggingConfig, level_override: Option<&str>, force_json: bool) {
    let level = level_override.unwrap_or(&config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if force_json || config.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .init();
    }
}

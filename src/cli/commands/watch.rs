//! Periodic refresh command.

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use desk_config::load_config;
use desk_store::StateStore;

use super::{quote_source, tick};
use crate::cli::WatchArgs;

pub async fn run(args: WatchArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let interval_secs = args.interval.unwrap_or(config.refresh.interval_secs).max(1);

    let store = StateStore::new(&config.data.state_dir);
    let source = quote_source(&config)?;

    info!(interval_secs, "starting refresh loop");
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;
        // State reloads every pass so edits made from another terminal
        // are picked up
        let mut state = store.load()?;
        tick::pass(&mut state, &source, &config)?;
        store.save(&state)?;
    }
}

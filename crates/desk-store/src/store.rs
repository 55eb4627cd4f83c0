//! JSON file store for session state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use desk_alerts::AlertRegistry;
use desk_core::error::StoreError;
use desk_core::types::Holding;
use desk_portfolio::Watchlist;

const WATCHLIST_FILE: &str = "watchlist.json";
const PORTFOLIO_FILE: &str = "portfolio.json";
const ALERTS_FILE: &str = "alerts.json";

/// Everything the dashboard keeps between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Watched symbols
    pub watchlist: Watchlist,
    /// Portfolio holdings
    pub portfolio: Vec<Holding>,
    /// Price alert rules
    pub alerts: AlertRegistry,
}

/// Directory-backed JSON store, one file per collection.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Create a store over a state directory. The directory is created
    /// on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The state directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load session state. Missing files load as empty collections;
    /// unreadable or malformed files are an error.
    pub fn load(&self) -> Result<SessionState, StoreError> {
        Ok(SessionState {
            watchlist: self.read_json(WATCHLIST_FILE)?,
            portfolio: self.read_json(PORTFOLIO_FILE)?,
            alerts: self.read_json(ALERTS_FILE)?,
        })
    }

    /// Persist session state, replacing the previous files.
    pub fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        self.write_json(WATCHLIST_FILE, &state.watchlist)?;
        self.write_json(PORTFOLIO_FILE, &state.portfolio)?;
        self.write_json(ALERTS_FILE, &state.alerts)?;
        debug!(dir = %self.dir.display(), "session state saved");
        Ok(())
    }

    fn read_json<T>(&self, file: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(file), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::types::{AlertDirection, AlertRule};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());

        let state = store.load().unwrap();
        assert!(state.watchlist.is_empty());
        assert!(state.portfolio.is_empty());
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state"));

        let mut state = SessionState::default();
        state.watchlist.add("AAPL");
        state.watchlist.add("SPY");
        state
            .portfolio
            .push(Holding::new("AAPL", dec!(10), dec!(100)).unwrap());
        state
            .alerts
            .set(AlertRule::new("MSFT", 300.0, AlertDirection::Below).unwrap());
        state
            .alerts
            .set(AlertRule::new("AAPL", 150.0, AlertDirection::Above).unwrap());

        store.save(&state).unwrap();
        let restored = store.load().unwrap();

        assert_eq!(restored, state);
        // Alert order survives the round trip
        let symbols: Vec<_> = restored.alerts.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL"]);
    }

    #[test]
    fn test_hit_flag_survives_persistence() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());

        let mut state = SessionState::default();
        state
            .alerts
            .set(AlertRule::new("AAPL", 150.0, AlertDirection::Above).unwrap());

        // Trigger, save, reload: the rule must stay spent
        assert_eq!(state.alerts.evaluate(|_| Some(151.0)).len(), 1);
        store.save(&state).unwrap();

        let mut restored = store.load().unwrap();
        assert!(restored.alerts.get("AAPL").unwrap().hit);
        assert!(restored.alerts.evaluate(|_| Some(151.0)).is_empty());
    }

    #[test]
    fn test_legacy_portfolio_field_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PORTFOLIO_FILE),
            r#"[{"symbol":"AAPL","shares":"10","cost":"100"}]"#,
        )
        .unwrap();

        let state = StateStore::new(dir.path()).load().unwrap();
        assert_eq!(state.portfolio[0].quantity, dec!(10));
        assert_eq!(state.portfolio[0].cost_basis, dec!(100));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ALERTS_FILE), "not json").unwrap();

        assert!(matches!(
            StateStore::new(dir.path()).load(),
            Err(StoreError::Serialization(_))
        ));
    }
}

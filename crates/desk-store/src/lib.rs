//! Session state persistence.
//!
//! The dashboard keeps three small collections between runs: the
//! watchlist, the portfolio holdings, and the alert rules. Each
//! serializes as one JSON document in a state directory. Field names
//! are stable (`symbol`, `quantity`/`shares`, `cost`, `target`,
//! `direction`, `hit`) so files written by earlier revisions keep
//! loading.

mod store;

pub use store::{SessionState, StateStore};

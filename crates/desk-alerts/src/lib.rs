//! Price alert registry.
//!
//! Holds one alert rule per symbol and evaluates them against current
//! prices. A rule fires at most once: its `hit` flag is flipped in
//! place on trigger and re-evaluation passes over it from then on, so
//! periodic refresh ticks never produce alert storms.

mod registry;

pub use registry::AlertRegistry;

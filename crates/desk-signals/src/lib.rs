//! Moving-average signal engine.
//!
//! This crate turns a closing-price series into a discrete trading
//! signal:
//! - Simple moving average (SMA)
//! - Dual-average policy (price vs. short and long SMA)
//! - Short-average policy (price vs. short SMA only)

mod engine;
mod sma;

pub use engine::{compute_signal, SignalConfig, SignalEngine, SignalPolicy};
pub use sma::Sma;

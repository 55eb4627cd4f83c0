//! Core data types for the market dashboard.

mod alert;
mod holding;
mod lookback;
mod price;
mod signal;

pub use alert::{AlertDirection, AlertRule, TriggerEvent};
pub use holding::Holding;
pub use lookback::Lookback;
pub use price::{PriceHistory, PricePoint};
pub use signal::{Signal, SignalKind, SignalReading};

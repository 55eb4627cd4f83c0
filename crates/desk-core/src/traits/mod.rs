//! Core traits for the market dashboard.

mod indicator;
mod quote_source;

pub use indicator::Indicator;
pub use quote_source::QuoteSource;

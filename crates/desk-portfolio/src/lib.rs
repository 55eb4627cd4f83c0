//! Portfolio valuation and watchlist.
//!
//! Values holdings against current prices with explicit unknowns: a
//! holding whose price cannot be fetched is reported without a market
//! value rather than counted as zero, and totals cover priced holdings
//! only.

mod valuator;
mod watchlist;

pub use valuator::{value, HoldingValue, PortfolioValuation};
pub use watchlist::{WatchQuote, Watchlist};

//! Core types and traits for the market dashboard.
//!
//! This crate provides the foundational building blocks including:
//! - Closing-price series types (PricePoint, PriceHistory)
//! - Alert rules and trigger events
//! - Portfolio holdings
//! - Trading signals
//! - The quote-source collaborator contract

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DeskError, DeskResult};
pub use traits::*;
pub use types::*;

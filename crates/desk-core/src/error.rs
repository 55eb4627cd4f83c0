//! Error types for the market dashboard.

use thiserror::Error;

/// Top-level dashboard error.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("Alert error: {0}")]
    Alert(#[from] AlertError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Holding error: {0}")]
    Holding(#[from] HoldingError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Signal engine errors.
///
/// Insufficient history is not an error; the engine reports it as
/// `Signal::NotAvailable`.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Indicator calculation errors.
///
/// The signal engine checks window lengths itself and reports a short
/// series as `Signal::NotAvailable`; this error is for callers driving
/// indicators directly.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// Holding errors, raised at creation time.
#[derive(Error, Debug)]
pub enum HoldingError {
    #[error("Holding symbol must not be empty")]
    EmptySymbol,

    #[error("Holding quantity must be non-negative, got {quantity}")]
    NegativeQuantity { quantity: rust_decimal::Decimal },

    #[error("Holding cost basis must be non-negative, got {cost}")]
    NegativeCost { cost: rust_decimal::Decimal },
}

/// Alert rule errors, raised at rule creation time.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Alert symbol must not be empty")]
    EmptySymbol,

    #[error("Alert target must be a positive price, got {target}")]
    InvalidTarget { target: f64 },
}

/// Data source errors.
///
/// A missing price or an empty history is not an error; quote sources
/// report those as `Ok(None)` / an empty series.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data source error: {0}")]
    Internal(String),
}

/// Session state persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations.
pub type DeskResult<T> = Result<T, DeskError>;

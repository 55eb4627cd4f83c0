//! Lookback windows for history requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far back a history request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lookback {
    /// One week
    #[serde(rename = "1w")]
    Week1,
    /// One month
    #[serde(rename = "1mo")]
    Month1,
    /// Three months
    #[serde(rename = "3mo")]
    #[default]
    Month3,
    /// Six months
    #[serde(rename = "6mo")]
    Month6,
    /// One year
    #[serde(rename = "1y")]
    Year1,
}

impl Lookback {
    /// Window length in days.
    pub fn as_days(&self) -> u32 {
        match self {
            Lookback::Week1 => 7,
            Lookback::Month1 => 30,
            Lookback::Month3 => 90,
            Lookback::Month6 => 180,
            Lookback::Year1 => 365,
        }
    }

    /// Window length in milliseconds.
    pub fn as_millis(&self) -> i64 {
        i64::from(self.as_days()) * 86_400_000
    }

    /// Get all available lookbacks.
    pub fn all() -> &'static [Lookback] {
        &[
            Lookback::Week1,
            Lookback::Month1,
            Lookback::Month3,
            Lookback::Month6,
            Lookback::Year1,
        ]
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lookback::Week1 => "1w",
            Lookback::Month1 => "1mo",
            Lookback::Month3 => "3mo",
            Lookback::Month6 => "6mo",
            Lookback::Year1 => "1y",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1w" | "1wk" | "week" => Ok(Lookback::Week1),
            "1mo" | "month" => Ok(Lookback::Month1),
            "3mo" => Ok(Lookback::Month3),
            "6mo" => Ok(Lookback::Month6),
            "1y" | "12mo" | "year" => Ok(Lookback::Year1),
            _ => Err(format!("Invalid lookback: {}", s)),
        }
    }
}

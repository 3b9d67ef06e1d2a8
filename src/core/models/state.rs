//! Machine state
//!
//! Derived from balance and price at call time, never stored.

use serde::{Deserialize, Serialize};

/// Whether the current balance covers the ticket price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineState {
    /// Balance is below the price - printing is declined
    #[default]
    Insufficient,
    /// Balance covers the price - the next print succeeds
    Ready,
}

impl MachineState {
    /// Derive the state from a balance and a price
    #[must_use]
    pub const fn from_balance(balance: i64, price: i64) -> Self {
        if balance >= price {
            Self::Ready
        } else {
            Self::Insufficient
        }
    }
}

impl std::fmt::Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insufficient => write!(f, "insufficient"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

impl std::str::FromStr for MachineState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insufficient" => Ok(Self::Insufficient),
            "ready" => Ok(Self::Ready),
            _ => Err(format!("Invalid state: {s}. Use: insufficient, ready")),
        }
    }
}

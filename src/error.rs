//! Error types for the ticket machine
//!
//! Every rejection the machine makes is an invalid-argument error: the
//! caller handed it a price or an amount it cannot accept. Rejections happen
//! before any state is touched.

use thiserror::Error;

/// Errors returned by [`TicketMachine`](crate::TicketMachine) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Ticket price was zero or negative
    #[error("invalid argument: ticket price must be positive, got {0}")]
    NonPositivePrice(i64),

    /// Inserted amount was zero or negative
    #[error("invalid argument: inserted amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// Inserting the amount would overflow the balance
    #[error("invalid argument: inserting {amount} would overflow balance {balance}")]
    BalanceOverflow {
        /// Balance held before the rejected insertion
        balance: i64,
        /// Amount that was rejected
        amount: i64,
    },
}

impl MachineError {
    /// Whether this error is an invalid-argument rejection.
    ///
    /// Always `true`: the machine has no other failure mode.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonPositivePrice(_) | Self::NonPositiveAmount(_) | Self::BalanceOverflow { .. }
        )
    }
}

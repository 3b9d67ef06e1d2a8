//! Ticket machine model
//!
//! A ticket machine holds three amounts:
//! - `price` - cost of one ticket, fixed at construction
//! - `balance` - money inserted and not yet spent or refunded
//! - `total` - money collected by successful prints
//!
//! Money that does not yet cover the price never reaches `total`. Printing
//! keeps any excess in the balance; only [`TicketMachine::refund`] gives it
//! back.
//!
//! # Examples
//!
//! ```
//! use ticketmachine::TicketMachine;
//!
//! let mut machine = TicketMachine::new(50).unwrap();
//! machine.insert_money(10).unwrap();
//! machine.insert_money(20).unwrap();
//! assert!(!machine.print_ticket());
//!
//! machine.insert_money(20).unwrap();
//! assert!(machine.print_ticket());
//! assert_eq!(machine.balance(), 0);
//! assert_eq!(machine.total(), 50);
//! ```

use log::{debug, trace, warn};

use super::MachineState;
use crate::config::MachineConfig;
use crate::error::MachineError;
use crate::output::MachineStatus;

/// A ticket machine with a fixed price
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_copy_implementations)]
pub struct TicketMachine {
    /// Cost of one ticket (always positive)
    price: i64,

    /// Money inserted and not yet consumed or refunded (never negative)
    balance: i64,

    /// Money collected by successful prints (never decreases)
    total: i64,
}

impl TicketMachine {
    /// Create a machine selling tickets at `price`
    ///
    /// Balance and total both start at zero.
    pub fn new(price: i64) -> Result<Self, MachineError> {
        if price <= 0 {
            warn!("Rejected ticket price {price}");
            return Err(MachineError::NonPositivePrice(price));
        }

        debug!("Ticket machine created with price {price}");
        Ok(Self {
            price,
            balance: 0,
            total: 0,
        })
    }

    /// Create a machine from configuration
    pub fn from_config(config: &MachineConfig) -> Result<Self, MachineError> {
        Self::new(config.machine.price)
    }

    /// Ticket price
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Money currently held
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Money collected by printed tickets
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Whether the balance covers a ticket
    #[must_use]
    pub const fn state(&self) -> MachineState {
        MachineState::from_balance(self.balance, self.price)
    }

    /// Shorthand for `state() == MachineState::Ready`
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state(), MachineState::Ready)
    }

    /// Money still needed before a ticket can be printed
    #[must_use]
    pub const fn amount_due(&self) -> i64 {
        if self.balance >= self.price {
            0
        } else {
            self.price - self.balance
        }
    }

    /// Snapshot of the machine for rendering
    #[must_use]
    pub const fn status(&self) -> MachineStatus {
        MachineStatus {
            price: self.price,
            balance: self.balance,
            total: self.total,
            state: self.state(),
            amount_due: self.amount_due(),
        }
    }

    /// Insert money into the machine
    ///
    /// Zero and negative amounts are rejected. The balance is untouched
    /// when an insertion fails.
    pub fn insert_money(&mut self, amount: i64) -> Result<(), MachineError> {
        if amount <= 0 {
            warn!("Rejected insertion of {amount}");
            return Err(MachineError::NonPositiveAmount(amount));
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            warn!("Rejected insertion of {amount}: balance {} would overflow", self.balance);
            return Err(MachineError::BalanceOverflow {
                balance: self.balance,
                amount,
            });
        };

        self.balance = balance;
        debug!("Inserted {amount}, balance is now {balance}");
        Ok(())
    }

    /// Print a ticket if the balance covers the price
    ///
    /// Returns `false` and changes nothing when the balance is short, or
    /// when the total cannot grow by another `price` without overflowing.
    /// Otherwise the price moves from the balance into the total and any
    /// excess stays in the balance.
    pub fn print_ticket(&mut self) -> bool {
        if self.balance < self.price {
            trace!("Print declined: balance {} below price {}", self.balance, self.price);
            return false;
        }

        let Some(total) = self.total.checked_add(self.price) else {
            warn!("Print declined: total {} cannot take another {}", self.total, self.price);
            return false;
        };

        self.balance -= self.price;
        self.total = total;
        debug!("Printed ticket, balance {} total {}", self.balance, self.total);
        true
    }

    /// Return the whole balance and reset it to zero
    ///
    /// The total is not affected. Refunding an empty machine returns 0.
    pub fn refund(&mut self) -> i64 {
        let refunded = std::mem::take(&mut self.balance);
        debug!("Refunded {refunded}");
        refunded
    }
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured results that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{MachineState, TicketMachine};

/// Output mode for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Snapshot of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MachineStatus {
    /// Ticket price
    pub price: i64,
    /// Money currently held
    pub balance: i64,
    /// Money collected by printed tickets
    pub total: i64,
    /// Whether the balance covers a ticket
    pub state: MachineState,
    /// Money still needed for the next ticket
    pub amount_due: i64,
}

/// Result of a print attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintResult {
    /// Whether a ticket was printed
    pub printed: bool,
    /// Ticket price
    pub price: i64,
    /// Balance after the attempt
    pub balance: i64,
    /// Total after the attempt
    pub total: i64,
}

/// Result of a refund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefundResult {
    /// Amount handed back
    pub refunded: i64,
    /// Balance after the refund
    pub balance: i64,
}

impl PrintResult {
    /// Capture the outcome of [`TicketMachine::print_ticket`]
    #[must_use]
    pub const fn new(printed: bool, machine: &TicketMachine) -> Self {
        Self {
            printed,
            price: machine.price(),
            balance: machine.balance(),
            total: machine.total(),
        }
    }
}

impl RefundResult {
    /// Capture the outcome of [`TicketMachine::refund`]
    #[must_use]
    pub const fn new(refunded: i64, machine: &TicketMachine) -> Self {
        Self {
            refunded,
            balance: machine.balance(),
        }
    }
}

impl MachineStatus {
    /// Format the result based on output mode
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.to_human(),
            OutputMode::Json => to_json(self),
        }
    }

    /// Human-readable form
    #[must_use]
    pub fn to_human(&self) -> String {
        let hint = if self.amount_due > 0 {
            format!("\nInsert {} more to print a ticket", self.amount_due)
        } else {
            String::new()
        };
        format!(
            "Price:   {}\nBalance: {}\nTotal:   {}\nState:   {}{hint}",
            self.price, self.balance, self.total, self.state
        )
    }

    /// JSON form
    #[must_use]
    pub fn to_json(&self) -> String {
        to_json(self)
    }
}

impl PrintResult {
    /// Format the result based on output mode
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.to_human(),
            OutputMode::Json => to_json(self),
        }
    }

    /// Human-readable form
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.printed {
            format!(
                "Ticket printed ({}). Balance: {}, total collected: {}",
                self.price, self.balance, self.total
            )
        } else if self.balance < self.price {
            format!(
                "Insufficient balance: {} inserted, ticket costs {}",
                self.balance, self.price
            )
        } else {
            format!("No ticket printed: total collected {} is at its limit", self.total)
        }
    }

    /// JSON form
    #[must_use]
    pub fn to_json(&self) -> String {
        to_json(self)
    }
}

impl RefundResult {
    /// Format the result based on output mode
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.to_human(),
            OutputMode::Json => to_json(self),
        }
    }

    /// Human-readable form
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.refunded == 0 {
            "Nothing to refund.".to_string()
        } else {
            format!("Refunded {}", self.refunded)
        }
    }

    /// JSON form
    #[must_use]
    pub fn to_json(&self) -> String {
        to_json(self)
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

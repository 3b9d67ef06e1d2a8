//! ticketmachine - A small model of a vending-style ticket machine
//!
//! The machine has a fixed ticket price, accepts cash deposits, prints a
//! ticket once enough money has been inserted and refunds whatever balance
//! is left over.
//!
//! ```
//! use ticketmachine::TicketMachine;
//!
//! let mut machine = TicketMachine::new(50).unwrap();
//! machine.insert_money(70).unwrap();
//! assert!(machine.print_ticket());
//! assert_eq!(machine.balance(), 20);
//! assert_eq!(machine.refund(), 20);
//! assert_eq!(machine.total(), 50);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::core::models::{MachineState, TicketMachine};
pub use config::MachineConfig;
pub use error::MachineError;

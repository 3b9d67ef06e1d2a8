//! Domain models for ticketmachine
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TicketMachine`] - Price, balance and collected total
//! - [`MachineState`] - Whether the balance covers a ticket

mod machine;
mod state;

pub use machine::TicketMachine;
pub use state::MachineState;

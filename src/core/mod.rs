//! Core domain logic for ticketmachine
//!
//! Pure state and transitions with no I/O dependencies.
//!
//! - `models/` - Domain types (`TicketMachine`, `MachineState`)

pub mod models;

//! Core domain types for ticket-desk
//!
//! Tickets, their status machine and the agent roster. The transition rules
//! live here so that every layer applies the same archive invariant.

mod agent;
mod builders;
mod status;
mod ticket;

pub use agent::AgentRoster;
pub use builders::TicketBuilder;
pub use status::Status;
pub use ticket::{Ticket, TicketDraft, TicketId};

//! Canonical ticket and agent storage
//!
//! The store owns the authoritative records and is the only place where
//! business rules are validated. Every operation hands back owned copies so
//! callers can never reach into the canonical data.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::{seed_agents, seed_tickets};

use crate::core::{Status, Ticket, TicketDraft, TicketId};
use crate::error::Result;
use async_trait::async_trait;

/// Asynchronous operations on the canonical ticket/agent data
///
/// Implementations serialize access internally; a caller issuing operations
/// one after another always observes its own earlier writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Discard all mutations and restore the seed dataset
    async fn reset(&self) -> Result<()>;

    /// Snapshot of every ticket, archived or not
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Snapshot of the agent roster
    async fn list_agents(&self) -> Result<Vec<String>>;

    /// Snapshot of a single ticket
    async fn get_ticket(&self, id: TicketId) -> Result<Ticket>;

    /// Create an open, unarchived ticket with the next free id
    async fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket>;

    /// Set the status; anything other than `Closed` clears the archive flag
    async fn set_ticket_status(&self, id: TicketId, status: Status) -> Result<Ticket>;

    /// Archive a closed ticket
    async fn archive_ticket(&self, id: TicketId) -> Result<Ticket>;

    /// Assign an agent by name; the roster is not consulted
    async fn assign_agent(&self, id: TicketId, agent: String) -> Result<Ticket>;

    /// Append a name to the roster, duplicates included
    async fn add_agent(&self, name: String) -> Result<String>;

    /// Remove the first roster entry equal to `name`
    async fn remove_agent(&self, name: String) -> Result<String>;
}

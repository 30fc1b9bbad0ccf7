//! Test utilities for ticket-desk
//!
//! This module provides common fixtures and assertions to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::config::Latency;
use crate::core::{Status, Ticket, TicketBuilder, TicketId};
use crate::state::TicketState;
use crate::store::{MemoryStore, TicketStore};
use std::sync::Arc;

/// Test fixture pairing a latency-free store with a state manager
pub struct TestSession {
    pub store: Arc<MemoryStore>,
    pub state: TicketState,
}

impl TestSession {
    /// Create a session over seed data; the cache starts empty
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new(Latency::None));
        let state = TicketState::new(store.clone());
        Self { store, state }
    }

    /// Create a session with the cache already fetched
    pub async fn loaded() -> Self {
        let mut session = Self::new();
        session.state.refresh().await;
        session
    }

    /// Assert the cache holds exactly what the store holds
    pub async fn assert_cache_matches_store(&self) {
        let tickets = self.store.list_tickets().await.expect("Failed to list tickets");
        let agents = self.store.list_agents().await.expect("Failed to list agents");

        assert_eq!(self.state.tickets().len(), tickets.len(), "Ticket counts don't match");
        for (cached, stored) in self.state.tickets().iter().zip(&tickets) {
            assert_tickets_equal(cached, stored);
        }
        assert_eq!(self.state.agents(), agents.as_slice(), "Rosters don't match");
    }
}

/// Create a ticket with fixed text and the given status
pub fn create_test_ticket(id: u64, status: Status) -> Ticket {
    TicketBuilder::new()
        .id(TicketId::new(id))
        .title(format!("Ticket {id}"))
        .description(format!("Description for ticket {id}"))
        .status(status)
        .build()
}

/// Assert that two tickets are equal (ignoring timestamps)
pub fn assert_tickets_equal(left: &Ticket, right: &Ticket) {
    assert_eq!(left.id, right.id, "Ticket IDs don't match");
    assert_eq!(left.title, right.title, "Ticket titles don't match");
    assert_eq!(
        left.description, right.description,
        "Ticket descriptions don't match"
    );
    assert_eq!(left.status, right.status, "Ticket statuses don't match");
    assert_eq!(
        left.is_archived, right.is_archived,
        "Ticket archive flags don't match"
    );
    assert_eq!(left.agent, right.agent, "Ticket agents don't match");
}

/// Assert no ticket is archived unless it is closed
pub fn assert_archive_invariant(tickets: &[Ticket]) {
    for ticket in tickets {
        assert!(
            !ticket.is_archived || ticket.status == Status::Closed,
            "ticket {} is archived while {}",
            ticket.id,
            ticket.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_starts_with_empty_cache() {
        let session = TestSession::new();
        assert!(session.state.tickets().is_empty());
        assert_eq!(session.store.list_tickets().await.unwrap().len(), 2);
    }

    #[test]
    fn test_create_test_ticket() {
        let ticket = create_test_ticket(9, Status::Closed);
        assert_eq!(ticket.id, TicketId::new(9));
        assert_eq!(ticket.status, Status::Closed);
        assert_archive_invariant(&[ticket]);
    }
}

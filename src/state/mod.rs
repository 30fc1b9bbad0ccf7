//! Client-side state manager
//!
//! [`TicketState`] mirrors the store in a local cache. It never validates
//! anything itself: a store rejection is handed back to the caller unchanged
//! and the cache stays exactly as it was. On success the store's returned
//! record replaces the cached one wholesale.
//!
//! The cache is derived data. [`TicketState::refresh`] rebuilds it from the
//! store at any time.

mod events;

pub use events::{EventBus, StateEvent};

use crate::core::{Status, Ticket, TicketDraft, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::store::TicketStore;
use events::LoadingGuard;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Cached view of tickets and agents with loading/error status
pub struct TicketState {
    store: Arc<dyn TicketStore>,
    tickets: Vec<Ticket>,
    agents: Vec<String>,
    loading: bool,
    error: Option<String>,
    events: EventBus,
}

impl std::fmt::Debug for TicketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketState")
            .field("store", &"Arc<dyn TicketStore>")
            .field("tickets", &self.tickets.len())
            .field("agents", &self.agents)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

impl TicketState {
    /// Create an empty state bound to `store`; call [`Self::refresh`] to populate it
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            tickets: Vec::new(),
            agents: Vec::new(),
            loading: false,
            error: None,
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }

    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed operation, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets not archived, in cache order
    #[must_use]
    pub fn active_tickets(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.is_active()).collect()
    }

    /// Archived tickets, in cache order
    #[must_use]
    pub fn archived_tickets(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.is_archived).collect()
    }

    #[must_use]
    pub fn tickets_for_agent(&self, agent: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.is_assigned_to(agent))
            .collect()
    }

    /// Replace the cached tickets with the store's
    ///
    /// Failures land in [`Self::error`] instead of being returned.
    pub async fn fetch_tickets(&mut self) {
        let _ = self.load_tickets().await;
    }

    /// Replace the cached roster with the store's
    ///
    /// Failures land in [`Self::error`] instead of being returned.
    pub async fn fetch_agents(&mut self) {
        let _ = self.load_agents().await;
    }

    async fn load_tickets(&mut self) -> Result<()> {
        self.error = None;
        let _loading = LoadingGuard::engage(&mut self.loading, &self.events);

        match self.store.list_tickets().await {
            Ok(tickets) => {
                debug!(count = tickets.len(), "tickets fetched");
                self.events.emit(StateEvent::TicketsLoaded {
                    count: tickets.len(),
                });
                self.tickets = tickets;
                Ok(())
            },
            Err(e) => {
                warn!(error = %e, "failed to fetch tickets");
                let message = e.to_string();
                self.events.emit(StateEvent::Failed {
                    ticket_id: None,
                    message: message.clone(),
                });
                self.error = Some(message);
                Err(e)
            },
        }
    }

    async fn load_agents(&mut self) -> Result<()> {
        self.error = None;
        let _loading = LoadingGuard::engage(&mut self.loading, &self.events);

        match self.store.list_agents().await {
            Ok(agents) => {
                debug!(count = agents.len(), "agents fetched");
                self.events.emit(StateEvent::AgentsLoaded {
                    count: agents.len(),
                });
                self.agents = agents;
                Ok(())
            },
            Err(e) => {
                warn!(error = %e, "failed to fetch agents");
                let message = e.to_string();
                self.events.emit(StateEvent::Failed {
                    ticket_id: None,
                    message: message.clone(),
                });
                self.error = Some(message);
                Err(e)
            },
        }
    }

    /// Rebuild the whole cache from the store
    pub async fn refresh(&mut self) {
        if self.load_tickets().await.is_ok() {
            self.fetch_agents().await;
        }
    }

    /// Reset the store to its seed data and rebuild the cache
    ///
    /// The first failing step's error is returned as the store reported it.
    pub async fn reset(&mut self) -> Result<()> {
        let result = self.store.reset().await;
        self.settle(None, result)?;
        info!("state reset");
        self.load_tickets().await?;
        self.load_agents().await
    }

    /// Create a ticket and append the store's record once confirmed
    pub async fn add_ticket(&mut self, draft: TicketDraft) -> Result<Ticket> {
        let result = self.store.create_ticket(draft).await;
        let ticket = self.settle(None, result)?;

        self.tickets.push(ticket.clone());
        self.events.emit(StateEvent::TicketAdded {
            ticket: ticket.clone(),
        });
        Ok(ticket)
    }

    pub async fn update_ticket_status(&mut self, id: TicketId, status: Status) -> Result<Ticket> {
        let result = self.store.set_ticket_status(id, status).await;
        let ticket = self.settle(Some(id), result)?;
        Ok(self.replace_cached(ticket))
    }

    pub async fn archive_ticket(&mut self, id: TicketId) -> Result<Ticket> {
        let result = self.store.archive_ticket(id).await;
        let ticket = self.settle(Some(id), result)?;
        Ok(self.replace_cached(ticket))
    }

    pub async fn assign_agent(&mut self, id: TicketId, agent: impl Into<String>) -> Result<Ticket> {
        let result = self.store.assign_agent(id, agent.into()).await;
        let ticket = self.settle(Some(id), result)?;
        Ok(self.replace_cached(ticket))
    }

    pub async fn add_agent(&mut self, name: impl Into<String>) -> Result<String> {
        let result = self.store.add_agent(name.into()).await;
        let name = self.settle(None, result)?;

        self.agents.push(name.clone());
        self.events.emit(StateEvent::AgentAdded { name: name.clone() });
        Ok(name)
    }

    pub async fn remove_agent(&mut self, name: impl Into<String>) -> Result<String> {
        let result = self.store.remove_agent(name.into()).await;
        let name = self.settle(None, result)?;

        if let Some(index) = self.agents.iter().position(|agent| *agent == name) {
            self.agents.remove(index);
        }
        self.events.emit(StateEvent::AgentRemoved { name: name.clone() });
        Ok(name)
    }

    /// Swap in the store's copy of a ticket
    ///
    /// A ticket the cache has never seen is appended.
    fn replace_cached(&mut self, ticket: Ticket) -> Ticket {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(cached) => *cached = ticket.clone(),
            None => {
                debug!(id = %ticket.id, "ticket missing from cache, appending");
                self.tickets.push(ticket.clone());
            },
        }

        self.events.emit(StateEvent::TicketReplaced {
            ticket: ticket.clone(),
        });
        ticket
    }

    /// Update the error slot from a store result and pass the result through
    ///
    /// Success clears the slot; failure records the message and is returned
    /// unchanged.
    fn settle<T>(&mut self, ticket_id: Option<TicketId>, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            },
            Err(e) => {
                warn!(ticket = ?ticket_id, error = %e, "store rejected operation");
                let message = e.to_string();
                self.events.emit(StateEvent::Failed {
                    ticket_id,
                    message: message.clone(),
                });
                self.error = Some(message);
                Err(e)
            },
        }
    }
}

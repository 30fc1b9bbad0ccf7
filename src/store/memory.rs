use super::{TicketStore, seed_agents, seed_tickets};
use crate::config::{Latency, StoreConfig};
use crate::core::{AgentRoster, Status, Ticket, TicketDraft, TicketId};
use crate::error::{Result, TicketDeskError};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct Records {
    tickets: Vec<Ticket>,
    agents: AgentRoster,
}

impl Records {
    fn seeded() -> Self {
        Self {
            tickets: seed_tickets(),
            agents: seed_agents(),
        }
    }

    fn next_id(&self) -> TicketId {
        self.tickets
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(TicketId::new(1), TicketId::next)
    }

    fn ticket_mut(&mut self, id: TicketId) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TicketDeskError::TicketNotFound { id })
    }
}

/// In-memory [`TicketStore`]
///
/// State lives for as long as the instance does. Each operation mutates under
/// the lock, releases it, and only then waits out the configured latency.
#[derive(Debug)]
pub struct MemoryStore {
    records: Mutex<Records>,
    latency: Latency,
}

impl MemoryStore {
    /// Store pre-populated with the seed dataset
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self {
            records: Mutex::new(Records::seeded()),
            latency,
        }
    }

    /// Store with no tickets and no agents
    #[must_use]
    pub fn empty(latency: Latency) -> Self {
        Self {
            records: Mutex::new(Records::default()),
            latency,
        }
    }

    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        if config.seed {
            Self::new(config.latency())
        } else {
            Self::empty(config.latency())
        }
    }

    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    async fn respond<T>(&self, value: T) -> Result<T> {
        self.latency.apply().await;
        Ok(value)
    }

    /// Apply `change` to the ticket with `id` and return a copy of the result
    async fn update_ticket<F>(&self, id: TicketId, op: &str, change: F) -> Result<Ticket>
    where
        F: FnOnce(&mut Ticket) -> Result<()> + Send,
    {
        let updated = {
            let mut records = self.records.lock().await;
            let ticket = records.ticket_mut(id).inspect_err(|e| {
                warn!(%id, op, error = %e, "ticket update rejected");
            })?;
            change(&mut *ticket).inspect_err(|e| {
                warn!(%id, op, error = %e, "ticket update rejected");
            })?;
            ticket.clone()
        };

        info!(%id, op, status = %updated.status, archived = updated.is_archived, "ticket updated");
        self.respond(updated).await
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn reset(&self) -> Result<()> {
        *self.records.lock().await = Records::seeded();
        info!("store reset to seed data");
        self.respond(()).await
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let tickets = self.records.lock().await.tickets.clone();
        debug!(count = tickets.len(), "listing tickets");
        self.respond(tickets).await
    }

    async fn list_agents(&self) -> Result<Vec<String>> {
        let agents: Vec<String> = self.records.lock().await.agents.clone().into();
        debug!(count = agents.len(), "listing agents");
        self.respond(agents).await
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket> {
        let ticket = {
            let records = self.records.lock().await;
            records
                .tickets
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(TicketDeskError::TicketNotFound { id })?
        };
        self.respond(ticket).await
    }

    async fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket> {
        draft.validate()?;

        let ticket = {
            let mut records = self.records.lock().await;
            let ticket = Ticket::from_draft(records.next_id(), draft);
            records.tickets.push(ticket.clone());
            ticket
        };

        info!(id = %ticket.id, title = %ticket.title, "ticket created");
        self.respond(ticket).await
    }

    async fn set_ticket_status(&self, id: TicketId, status: Status) -> Result<Ticket> {
        self.update_ticket(id, "set_status", |ticket| {
            ticket.set_status(status);
            Ok(())
        })
        .await
    }

    async fn archive_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.update_ticket(id, "archive", Ticket::archive).await
    }

    async fn assign_agent(&self, id: TicketId, agent: String) -> Result<Ticket> {
        self.update_ticket(id, "assign_agent", |ticket| {
            ticket.assign_agent(agent);
            Ok(())
        })
        .await
    }

    async fn add_agent(&self, name: String) -> Result<String> {
        self.records.lock().await.agents.add(name.clone());
        info!(agent = %name, "agent added");
        self.respond(name).await
    }

    async fn remove_agent(&self, name: String) -> Result<String> {
        let removed = self.records.lock().await.agents.remove_first(&name);
        let Some(removed) = removed else {
            warn!(agent = %name, "agent removal rejected");
            return Err(TicketDeskError::AgentNotFound { name });
        };

        info!(agent = %removed, "agent removed");
        self.respond(removed).await
    }
}

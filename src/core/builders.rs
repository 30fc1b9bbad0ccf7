use super::{Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used for seed data and fixtures. `build` does not enforce the archive
/// invariant; `archived(true)` on a non-closed ticket is silently dropped.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    archived: bool,
    agent: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Mark as archived (only honored for closed tickets)
    #[must_use]
    pub const fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Set assigned agent
    #[must_use]
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let status = self.status.unwrap_or_default();
        Ticket {
            id: self.id.unwrap_or(TicketId::new(1)),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status,
            is_archived: self.archived && status.is_closed(),
            agent: self.agent,
            created_at: Some(self.created_at.unwrap_or_else(Utc::now)),
        }
    }
}

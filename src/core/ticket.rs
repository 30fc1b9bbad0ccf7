use super::Status;
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric ticket identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A support ticket
///
/// `is_archived` may only be true while `status` is [`Status::Closed`]. The
/// mutators below keep that invariant; callers outside this module should go
/// through them rather than writing the fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Create an open, unarchived ticket from a draft
    #[must_use]
    pub fn from_draft(id: TicketId, draft: TicketDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: Status::Open,
            is_archived: false,
            agent: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Change status; leaving `Closed` unarchives the ticket
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        if !status.is_closed() {
            self.is_archived = false;
        }
    }

    /// Archive the ticket
    ///
    /// Fails without mutating anything unless the ticket is closed.
    pub fn archive(&mut self) -> Result<()> {
        if !self.status.is_closed() {
            return Err(TicketDeskError::archive_requires_closed());
        }
        self.is_archived = true;
        Ok(())
    }

    /// Assign an agent by name; the name is not checked against any roster
    pub fn assign_agent(&mut self, agent: impl Into<String>) {
        self.agent = Some(agent.into());
    }

    /// Whether the ticket shows up in the active view
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_archived
    }

    #[must_use]
    pub fn is_assigned_to(&self, agent: &str) -> bool {
        self.agent.as_deref() == Some(agent)
    }
}

/// User-supplied fields for a new ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Reject blank title or description
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TicketDeskError::InvalidInput(
                "ticket title must not be empty".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(TicketDeskError::InvalidInput(
                "ticket description must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_draft_defaults() {
        let ticket = Ticket::from_draft(TicketId::new(3), TicketDraft::new("T", "D"));
        assert_eq!(ticket.id, TicketId::new(3));
        assert_eq!(ticket.status, Status::Open);
        assert!(!ticket.is_archived);
        assert!(ticket.agent.is_none());
        assert!(ticket.created_at.is_some());
    }

    #[test]
    fn test_archive_requires_closed() {
        for status in [Status::Open, Status::InProgress] {
            let mut ticket = TicketBuilder::new().status(status).build();
            let err = ticket.archive().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidTransition);
            assert!(!ticket.is_archived);
        }

        let mut ticket = TicketBuilder::new().status(Status::Closed).build();
        ticket.archive().unwrap();
        assert!(ticket.is_archived);
    }

    #[test]
    fn test_leaving_closed_unarchives() {
        for status in [Status::Open, Status::InProgress] {
            let mut ticket = TicketBuilder::new().status(Status::Closed).archived(true).build();
            ticket.set_status(status);
            assert_eq!(ticket.status, status);
            assert!(!ticket.is_archived);
        }
    }

    #[test]
    fn test_closed_to_closed_keeps_archive_flag() {
        let mut ticket = TicketBuilder::new().status(Status::Closed).archived(true).build();
        ticket.set_status(Status::Closed);
        ticket.set_status(Status::Closed);
        assert!(ticket.is_archived);
    }

    #[test]
    fn test_draft_validation() {
        assert!(TicketDraft::new("Title", "Body").validate().is_ok());
        assert!(TicketDraft::new("  ", "Body").validate().is_err());
        assert!(TicketDraft::new("Title", "").validate().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let ticket = TicketBuilder::new()
            .id(TicketId::new(7))
            .title("A")
            .description("B")
            .status(Status::InProgress)
            .agent("Stan")
            .build();
        let json = serde_json::to_value(&ticket).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["isArchived"], false);
        assert_eq!(json["agent"], "Stan");
    }
}

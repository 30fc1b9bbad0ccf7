//! Error types for ticket-desk
//!
//! Every failure in this crate is a rejected operation that the caller can
//! report or retry. Nothing here is fatal.

use crate::core::TicketId;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Message carried by a rejected archive of a ticket that is not closed
pub const ARCHIVE_REQUIRES_CLOSED: &str = "Ticket must be closed to be archived";

/// Main error type for ticket-desk
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// Referenced ticket does not exist
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    /// Referenced agent is not on the roster
    #[error("Agent not found: {name}")]
    AgentNotFound { name: String },

    /// A business rule forbids the requested transition
    #[error("{0}")]
    InvalidTransition(String),

    /// Input rejected before touching any data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Custom(String),
}

/// Coarse classification of [`TicketDeskError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidTransition,
    InvalidInput,
    Configuration,
    Other,
}

impl TicketDeskError {
    /// Shorthand for the archive rule violation
    #[must_use]
    pub fn archive_requires_closed() -> Self {
        Self::InvalidTransition(ARCHIVE_REQUIRES_CLOSED.to_string())
    }

    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TicketNotFound { .. } | Self::AgentNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidTransition(_) => ErrorKind::InvalidTransition,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Config(_) => ErrorKind::Configuration,
            Self::Custom(_) => ErrorKind::Other,
        }
    }

    /// Check if this error is recoverable by the caller
    ///
    /// Configuration errors need a fix outside the running session.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }

    /// Get suggestions for resolving the error
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Refresh the ticket list to pick up the current ids".to_string(),
            ],
            Self::AgentNotFound { name } => vec![
                format!("Check the spelling of '{name}'"),
                "Refresh the agent roster".to_string(),
            ],
            Self::InvalidTransition(_) => {
                vec!["Close the ticket before archiving it".to_string()]
            },
            Self::InvalidInput(_) => vec!["Title and description must not be empty".to_string()],
            Self::Config(_) => vec![
                "Check the configuration file syntax".to_string(),
                "Check TICKET_DESK__* environment variables".to_string(),
            ],
            Self::Custom(_) => vec![],
        }
    }
}

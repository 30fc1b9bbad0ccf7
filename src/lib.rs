//! ticket-desk - Ticket lifecycle and agent assignment for a support desk
//!
//! This crate provides the state core of a small support-ticket tracker:
//! - An in-memory store that owns tickets and the agent roster and enforces
//!   the lifecycle rules (only a closed ticket may be archived)
//! - A state manager that keeps a client-side cache in step with the store
//!   and exposes derived active/archived views
//! - Layered configuration, including the store's simulated latency
//!
//! Presentation layers only talk to [`state::TicketState`].

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticket_desk::config::Latency;
//! use ticket_desk::core::{Status, TicketId};
//! use ticket_desk::state::TicketState;
//! use ticket_desk::store::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new(Latency::None));
//! let mut state = TicketState::new(store);
//! state.refresh().await;
//!
//! state.update_ticket_status(TicketId::new(1), Status::Closed).await?;
//! state.archive_ticket(TicketId::new(1)).await?;
//! assert_eq!(state.archived_tickets().len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ErrorKind, Result, TicketDeskError};

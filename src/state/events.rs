//! Change notifications emitted by the state manager

use crate::core::{Ticket, TicketId};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 100;

/// Something observable changed in the cached state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    LoadingChanged(bool),
    TicketsLoaded { count: usize },
    AgentsLoaded { count: usize },
    TicketAdded { ticket: Ticket },
    TicketReplaced { ticket: Ticket },
    AgentAdded { name: String },
    AgentRemoved { name: String },
    /// An operation failed; `ticket_id` is set when it targeted one ticket
    Failed {
        ticket_id: Option<TicketId>,
        message: String,
    },
}

/// Fan-out of [`StateEvent`]s to any number of subscribers
pub struct EventBus {
    sender: broadcast::Sender<StateEvent>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.sender.subscribe()
    }

    /// Publish an event; having no subscribers is fine
    pub fn emit(&self, event: StateEvent) {
        tracing::trace!(?event, "state event");
        let _ = self.sender.send(event);
    }
}

/// Holds the loading flag up for as long as it lives
///
/// Dropping the guard clears the flag and announces it, whichever way the
/// surrounding operation finished.
pub(super) struct LoadingGuard<'a> {
    flag: &'a mut bool,
    events: &'a EventBus,
}

impl<'a> LoadingGuard<'a> {
    pub(super) fn engage(flag: &'a mut bool, events: &'a EventBus) -> Self {
        *flag = true;
        events.emit(StateEvent::LoadingChanged(true));
        Self { flag, events }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
        self.events.emit(StateEvent::LoadingChanged(false));
    }
}

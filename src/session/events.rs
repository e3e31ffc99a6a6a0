//! Session lifecycle events.
//!
//! Session expiry is published on an explicit broadcast channel that
//! interested components subscribe to, instead of a transport-layer
//! singleton silently mutating shared storage on 401 responses.

use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// A session lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the session token; the store has been cleared
    Expired,
    /// The user signed out deliberately
    SignedOut,
}

/// Clonable handle publishing and subscribing to session events
#[derive(Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to session events from this point on
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: SessionEvent) {
        // No subscribers is fine; the event is simply dropped
        let _ = self.tx.send(event);
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

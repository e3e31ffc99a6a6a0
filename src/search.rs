//! Debounced search coordination.
//!
//! Fast typing is rate-limited by a debounce window, and every request is
//! stamped with a monotonically increasing generation so a late-arriving
//! stale response can never overwrite the results of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

/// A request generation handed out per keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Coordinates one search box: debounce plus stale-response rejection
pub struct SearchCoordinator {
    debounce: Duration,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SearchCoordinator {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Register a keystroke, superseding all earlier tickets
    pub fn keystroke(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Wait out the debounce window. Returns false when another keystroke
    /// arrived in the meantime, in which case no request should be issued.
    pub async fn settled(&self, ticket: Ticket) -> bool {
        sleep(self.debounce).await;
        ticket.0 == self.issued.load(Ordering::SeqCst)
    }

    /// Try to apply a response for the given ticket. Returns false when a
    /// newer response has already been applied; the caller must then drop
    /// the stale results.
    pub fn commit(&self, ticket: Ticket) -> bool {
        self.applied.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }
}

//! Authenticated call gateway.
//!
//! Every authenticated page call goes through the gateway: it attaches
//! the persisted session's bearer token and, when the backend rejects it,
//! clears the store once and publishes [`SessionEvent::Expired`] for
//! subscribers to react to. Expiry handling is therefore explicit and
//! scoped here rather than a hidden transport-layer side effect.

use std::future::Future;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::session::{SessionEvent, SessionEvents, SessionStore};

/// Runs authenticated calls against the service facades
pub struct Gateway {
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
}

impl Gateway {
    pub fn new(store: Arc<dyn SessionStore>, events: SessionEvents) -> Self {
        Self { store, events }
    }

    /// Run a call with the current session's token.
    ///
    /// Fails with `Unauthorized` when no session is persisted. When the
    /// call itself comes back `Unauthorized`, the session is cleared and
    /// expiry is published before the error propagates to the caller.
    pub async fn with_token<T, F, Fut>(&self, call: F) -> AppResult<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let session = self
            .store
            .load()
            .await?
            .ok_or(AppError::Unauthorized)?;

        match call(session.token).await {
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Backend rejected session token, signing out");
                self.store.clear().await?;
                self.events.publish(SessionEvent::Expired);
                Err(e)
            }
            other => other,
        }
    }
}

//! Session manager: resolution, login/logout, and last-known state.
//!
//! This is the client's single source of truth for "who is signed in".
//! Pages read the last known state synchronously and call `resolve` on
//! mount to revalidate the persisted session against the backend.

use std::sync::{Arc, RwLock};

use crate::domain::{AuthenticatedUser, Session};
use crate::errors::AppResult;
use crate::forms::{self, LoginForm, RegisterForm};
use crate::routes;
use crate::services::AuthService;
use crate::session::events::{SessionEvent, SessionEvents};
use crate::session::store::SessionStore;

/// Resolution state of the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Resolution has not completed; guards must not authorize yet
    Loading,
    Unauthenticated,
    Authenticated(AuthenticatedUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Outcome of a session resolution: the state plus an optional navigation
/// target (set when configured to redirect to login on failure).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    pub state: SessionState,
    pub navigate: Option<String>,
}

/// Manages the persisted session and its resolution lifecycle
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    auth: Arc<dyn AuthService>,
    events: SessionEvents,
    state: RwLock<SessionState>,
    redirect_to_login_if_fail: bool,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        auth: Arc<dyn AuthService>,
        events: SessionEvents,
    ) -> Self {
        Self {
            store,
            auth,
            events,
            state: RwLock::new(SessionState::Loading),
            redirect_to_login_if_fail: false,
        }
    }

    /// Navigate to the login page whenever resolution ends unauthenticated
    pub fn with_login_redirect(mut self) -> Self {
        self.redirect_to_login_if_fail = true;
        self
    }

    /// Last known state, available synchronously
    pub fn current(&self) -> SessionState {
        self.read_state()
    }

    /// Resolve the persisted session, revalidating it with the backend.
    ///
    /// Any ambiguity fails closed: a transport error during validation
    /// leaves the caller unauthenticated (without discarding the persisted
    /// session), while an explicit rejection clears the store and publishes
    /// [`SessionEvent::Expired`].
    pub async fn resolve(&self, requested_path: &str) -> ResolvedSession {
        self.set_state(SessionState::Loading);

        let state = match self.store.load().await {
            Ok(Some(session)) => self.revalidate(session).await,
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                SessionState::Unauthenticated
            }
        };

        self.set_state(state.clone());

        let navigate = match &state {
            SessionState::Unauthenticated if self.redirect_to_login_if_fail => {
                Some(routes::login_with_redirect(requested_path))
            }
            _ => None,
        };

        ResolvedSession { state, navigate }
    }

    async fn revalidate(&self, session: Session) -> SessionState {
        match self.auth.who_am_i(&session.token).await {
            Ok(user) => {
                // Keep the persisted user record fresh
                if user != session.user {
                    let refreshed = Session::new(session.token.clone(), user.clone());
                    if let Err(e) = self.store.save(&refreshed).await {
                        tracing::warn!("Failed to refresh persisted session: {}", e);
                    }
                }
                SessionState::Authenticated(user)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Persisted session rejected by backend, signing out");
                self.discard_session().await;
                self.events.publish(SessionEvent::Expired);
                SessionState::Unauthenticated
            }
            Err(e) => {
                // Ambiguous (network) failure: fail closed but keep the
                // persisted session for the next attempt
                tracing::warn!("Session validation failed: {}", e);
                SessionState::Unauthenticated
            }
        }
    }

    /// Validate the login form locally, then authenticate and persist the
    /// returned session. Local validation failure issues no backend call.
    pub async fn login(&self, form: &LoginForm) -> AppResult<Session> {
        forms::validate(form)?;

        let session = self.auth.login(&form.email, &form.password).await?;
        self.store.save(&session).await?;
        self.set_state(SessionState::Authenticated(session.user.clone()));

        tracing::info!(role = %session.user.role, "Signed in");
        Ok(session)
    }

    /// Validate the registration form locally, then register and persist
    /// the returned session.
    pub async fn register(&self, form: &RegisterForm) -> AppResult<Session> {
        forms::validate(form)?;

        let session = self
            .auth
            .register(&form.email, &form.password, &form.full_name)
            .await?;
        self.store.save(&session).await?;
        self.set_state(SessionState::Authenticated(session.user.clone()));

        Ok(session)
    }

    /// Sign out: revoke the token (best effort), clear the persisted
    /// session, and publish [`SessionEvent::SignedOut`].
    pub async fn sign_out(&self) -> AppResult<()> {
        if let Ok(Some(session)) = self.store.load().await {
            if let Err(e) = self.auth.logout(&session.token).await {
                tracing::warn!("Token revocation failed: {}", e.user_message());
            }
        }

        self.store.clear().await?;
        self.set_state(SessionState::Unauthenticated);
        self.events.publish(SessionEvent::SignedOut);
        Ok(())
    }

    async fn discard_session(&self) {
        if let Err(e) = self.store.clear().await {
            tracing::error!("Failed to clear persisted session: {}", e);
        }
    }

    fn read_state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_state(&self, state: SessionState) {
        *self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = state;
    }
}

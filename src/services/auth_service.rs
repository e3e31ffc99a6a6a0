//! Authentication facade: register, login, session validation, logout.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Role, Session};
use crate::errors::{AppError, AppResult};
use crate::infra::platform::UserAccount;
use crate::infra::{Platform, Repository};

/// Authentication operations against the backend
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new student account and open a session
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> AppResult<Session>;

    /// Authenticate and open a session
    async fn login(&self, email: &str, password: &str) -> AppResult<Session>;

    /// The backend's "who am I" operation: resolve the token to the
    /// current user record, or `Unauthorized` when the token is no longer
    /// valid
    async fn who_am_i(&self, token: &str) -> AppResult<AuthenticatedUser>;

    /// Revoke the token
    async fn logout(&self, token: &str) -> AppResult<()>;
}

/// In-memory implementation of [`AuthService`]
pub struct Authenticator {
    platform: Arc<Platform>,
    latency: Duration,
}

impl Authenticator {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> AppResult<Session> {
        super::simulate_latency(self.latency).await;

        if self.platform.account_by_email(email).await.is_some() {
            return Err(AppError::conflict("Account"));
        }

        let user = AuthenticatedUser::new(
            email.to_string(),
            full_name.to_string(),
            Role::Student,
        );
        let account = UserAccount {
            user: user.clone(),
            password: password.to_string(),
        };
        self.platform.users.insert(user.id, account).await;

        tracing::info!(%email, "Account registered");
        Ok(self.platform.open_session(user).await)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        super::simulate_latency(self.latency).await;

        let account = self
            .platform
            .account_by_email(email)
            .await
            .ok_or(AppError::InvalidCredentials)?;

        if account.password != password {
            return Err(AppError::InvalidCredentials);
        }
        if !account.user.is_active() {
            return Err(AppError::Forbidden);
        }

        Ok(self.platform.open_session(account.user).await)
    }

    async fn who_am_i(&self, token: &str) -> AppResult<AuthenticatedUser> {
        super::simulate_latency(self.latency).await;
        self.platform.authenticate(token).await
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        super::simulate_latency(self.latency).await;
        self.platform.revoke_token(token).await;
        Ok(())
    }
}

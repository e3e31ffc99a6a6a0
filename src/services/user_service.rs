//! User profile facade.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::infra::Platform;

/// Profile operations for the signed-in user
#[async_trait]
pub trait UserService: Send + Sync {
    /// The signed-in user's profile
    async fn profile(&self, token: &str) -> AppResult<AuthenticatedUser>;

    /// Update profile fields; `None` leaves a field unchanged
    async fn update_profile(
        &self,
        token: &str,
        full_name: Option<String>,
    ) -> AppResult<AuthenticatedUser>;
}

/// In-memory implementation of [`UserService`]
pub struct UserManager {
    platform: Arc<Platform>,
    latency: Duration,
}

impl UserManager {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn profile(&self, token: &str) -> AppResult<AuthenticatedUser> {
        super::simulate_latency(self.latency).await;
        self.platform.authenticate(token).await
    }

    async fn update_profile(
        &self,
        token: &str,
        full_name: Option<String>,
    ) -> AppResult<AuthenticatedUser> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;

        if let Some(full_name) = full_name {
            if full_name.trim().is_empty() {
                return Err(AppError::validation("Full name is required"));
            }
            let updated = self
                .platform
                .users
                .mutate(user.id, |account| account.user.update_full_name(full_name))
                .await
                .ok_or(AppError::NotFound)?;
            return Ok(updated.user);
        }

        Ok(user)
    }
}

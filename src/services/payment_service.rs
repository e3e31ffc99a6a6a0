//! Payment facade: checkout initiation and confirmation.
//!
//! Checkout hands the user off to the payment processor's hosted page;
//! the return trip exchanges the `session_id` query parameter for the
//! transaction status. Payment processing itself is the processor's
//! business, so the in-memory backend treats confirmation as payment.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CheckoutSession, Course, Enrollment, Transaction, TransactionStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Platform, Repository};

/// Payment operations
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Start a checkout for a paid course; the returned session carries
    /// the hosted-page redirect URL
    async fn create_checkout(&self, token: &str, course_id: Uuid) -> AppResult<CheckoutSession>;

    /// Exchange a checkout session id for the paid transaction. Creates
    /// the enrollment on success.
    async fn confirm(&self, token: &str, session_id: &str) -> AppResult<Transaction>;

    /// Cancel an open checkout session
    async fn cancel(&self, session_id: &str) -> AppResult<Transaction>;

    /// The user's transaction history
    async fn transactions(&self, token: &str) -> AppResult<Vec<Transaction>>;
}

/// In-memory implementation of [`PaymentService`]
pub struct PaymentProcessor {
    platform: Arc<Platform>,
    latency: Duration,
}

impl PaymentProcessor {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }

    /// Remove and return an open checkout session
    async fn take_checkout(&self, session_id: &str) -> AppResult<CheckoutSession> {
        self.platform
            .checkouts
            .write()
            .await
            .remove(session_id)
            .ok_or_not_found()
    }
}

#[async_trait]
impl PaymentService for PaymentProcessor {
    async fn create_checkout(&self, token: &str, course_id: Uuid) -> AppResult<CheckoutSession> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let course = self
            .platform
            .courses
            .get(course_id)
            .await
            .filter(Course::is_published)
            .ok_or_not_found()?;

        if course.is_free() {
            return Err(AppError::bad_request("This course is free; enroll directly"));
        }
        if self.platform.enrollment_for(user.id, course_id).await.is_some() {
            return Err(AppError::conflict("Enrollment"));
        }

        let checkout = CheckoutSession::new(user.id, course_id, course.price_cents);
        self.platform
            .checkouts
            .write()
            .await
            .insert(checkout.session_id.clone(), checkout.clone());

        tracing::info!(course = %course.title, session = %checkout.session_id, "Checkout created");
        Ok(checkout)
    }

    async fn confirm(&self, token: &str, session_id: &str) -> AppResult<Transaction> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let checkout = self.take_checkout(session_id).await?;

        if checkout.user_id != user.id {
            return Err(AppError::Forbidden);
        }

        let transaction = checkout.into_transaction(TransactionStatus::Paid);
        self.platform
            .transactions
            .insert(transaction.id, transaction.clone())
            .await;

        let enrollment = Enrollment::new(user.id, transaction.course_id);
        self.platform
            .enrollments
            .insert(enrollment.id, enrollment)
            .await;

        tracing::info!(session = %session_id, "Payment confirmed, enrollment created");
        Ok(transaction)
    }

    async fn cancel(&self, session_id: &str) -> AppResult<Transaction> {
        super::simulate_latency(self.latency).await;

        let checkout = self.take_checkout(session_id).await?;
        let transaction = checkout.into_transaction(TransactionStatus::Cancelled);
        self.platform
            .transactions
            .insert(transaction.id, transaction.clone())
            .await;

        Ok(transaction)
    }

    async fn transactions(&self, token: &str) -> AppResult<Vec<Transaction>> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        Ok(self
            .platform
            .transactions
            .filter(|t| t.user_id == user.id)
            .await)
    }
}

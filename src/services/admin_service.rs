//! Admin facade: review queues and approval workflows.
//!
//! Approval is the admin-mediated transition pending -> approved/rejected
//! for instructor applications and course submissions. Both admin roles
//! may review; rejection always carries a reason.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Course, CourseStatus, InstructorApplication, Role};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Platform, Repository};
use crate::types::{Paginated, PaginationParams};

/// A reviewer's verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
}

impl ReviewDecision {
    fn validated(&self) -> AppResult<()> {
        if let ReviewDecision::Reject { reason } = self {
            if reason.trim().is_empty() {
                return Err(AppError::validation("A rejection reason is required"));
            }
        }
        Ok(())
    }
}

/// Admin-side operations
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Pending instructor applications, oldest first
    async fn pending_applications(
        &self,
        token: &str,
        params: &PaginationParams,
    ) -> AppResult<Paginated<InstructorApplication>>;

    /// Approve or reject an application. Approval promotes the applicant
    /// to the instructor role.
    async fn review_application(
        &self,
        token: &str,
        application_id: Uuid,
        decision: ReviewDecision,
    ) -> AppResult<InstructorApplication>;

    /// Courses waiting for review, oldest first
    async fn pending_courses(
        &self,
        token: &str,
        params: &PaginationParams,
    ) -> AppResult<Paginated<Course>>;

    /// Approve (publish) or reject a submitted course
    async fn review_course(
        &self,
        token: &str,
        course_id: Uuid,
        decision: ReviewDecision,
    ) -> AppResult<Course>;
}

/// In-memory implementation of [`AdminService`]
pub struct AdminConsole {
    platform: Arc<Platform>,
    latency: Duration,
}

impl AdminConsole {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl AdminService for AdminConsole {
    async fn pending_applications(
        &self,
        token: &str,
        params: &PaginationParams,
    ) -> AppResult<Paginated<InstructorApplication>> {
        super::simulate_latency(self.latency).await;

        self.platform.authenticate_admin(token).await?;
        let pending = self
            .platform
            .applications
            .filter(|a| a.status.is_pending())
            .await;

        Ok(Paginated::from_all(pending, params))
    }

    async fn review_application(
        &self,
        token: &str,
        application_id: Uuid,
        decision: ReviewDecision,
    ) -> AppResult<InstructorApplication> {
        super::simulate_latency(self.latency).await;

        let reviewer = self.platform.authenticate_admin(token).await?;
        decision.validated()?;

        let application = self
            .platform
            .applications
            .get(application_id)
            .await
            .ok_or_not_found()?;
        if !application.status.is_pending() {
            return Err(AppError::bad_request("Application has already been reviewed"));
        }

        let reviewed = self
            .platform
            .applications
            .mutate(application_id, |a| match &decision {
                ReviewDecision::Approve => a.approve(reviewer.id),
                ReviewDecision::Reject { reason } => a.reject(reviewer.id, reason.clone()),
            })
            .await
            .ok_or_not_found()?;

        if matches!(decision, ReviewDecision::Approve) {
            self.platform
                .users
                .mutate(reviewed.user_id, |account| {
                    account.user.role = Role::Instructor;
                })
                .await;
        }

        tracing::info!(
            application = %application_id,
            approved = matches!(decision, ReviewDecision::Approve),
            reviewer = %reviewer.email,
            "Instructor application reviewed"
        );
        Ok(reviewed)
    }

    async fn pending_courses(
        &self,
        token: &str,
        params: &PaginationParams,
    ) -> AppResult<Paginated<Course>> {
        super::simulate_latency(self.latency).await;

        self.platform.authenticate_admin(token).await?;
        let pending = self
            .platform
            .courses
            .filter(|c| c.status == CourseStatus::PendingReview)
            .await;

        Ok(Paginated::from_all(pending, params))
    }

    async fn review_course(
        &self,
        token: &str,
        course_id: Uuid,
        decision: ReviewDecision,
    ) -> AppResult<Course> {
        super::simulate_latency(self.latency).await;

        let reviewer = self.platform.authenticate_admin(token).await?;
        decision.validated()?;

        let course = self.platform.courses.get(course_id).await.ok_or_not_found()?;
        if course.status != CourseStatus::PendingReview {
            return Err(AppError::bad_request("Course is not awaiting review"));
        }

        let reviewed = self
            .platform
            .courses
            .mutate(course_id, |c| match &decision {
                ReviewDecision::Approve => c.approve(),
                ReviewDecision::Reject { reason } => c.reject(reason.clone()),
            })
            .await
            .ok_or_not_found()?;

        tracing::info!(
            course = %reviewed.title,
            approved = reviewed.is_published(),
            reviewer = %reviewer.email,
            "Course reviewed"
        );
        Ok(reviewed)
    }
}

//! Instructor facade: applications and course management.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Course, CourseDraft, CourseStatus, InstructorApplication, Role};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::forms::{self, ApplicationForm};
use crate::infra::{Platform, Repository};

/// Instructor-side operations
#[async_trait]
pub trait InstructorService: Send + Sync {
    /// Submit an application to become an instructor. Students only; one
    /// pending application at a time.
    async fn apply(&self, token: &str, form: &ApplicationForm)
        -> AppResult<InstructorApplication>;

    /// The user's most recent application, if any
    async fn my_application(&self, token: &str) -> AppResult<Option<InstructorApplication>>;

    /// Create a draft course owned by the instructor
    async fn create_course(&self, token: &str, draft: CourseDraft) -> AppResult<Course>;

    /// Submit a draft course into the admin review queue
    async fn submit_for_review(&self, token: &str, course_id: Uuid) -> AppResult<Course>;

    /// All courses owned by the instructor, whatever their status
    async fn my_courses(&self, token: &str) -> AppResult<Vec<Course>>;
}

/// In-memory implementation of [`InstructorService`]
pub struct InstructorDesk {
    platform: Arc<Platform>,
    latency: Duration,
}

impl InstructorDesk {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl InstructorService for InstructorDesk {
    async fn apply(
        &self,
        token: &str,
        form: &ApplicationForm,
    ) -> AppResult<InstructorApplication> {
        super::simulate_latency(self.latency).await;

        forms::validate(form)?;
        let user = self.platform.authenticate_role(token, Role::Student).await?;

        let has_pending = self
            .platform
            .applications
            .find(|a| a.user_id == user.id && a.status.is_pending())
            .await
            .is_some();
        if has_pending {
            return Err(AppError::conflict("Application"));
        }

        let application = InstructorApplication::new(
            user.id,
            form.motivation.clone(),
            form.cv_path.clone(),
        );
        self.platform
            .applications
            .insert(application.id, application.clone())
            .await;

        tracing::info!(user = %user.email, "Instructor application submitted");
        Ok(application)
    }

    async fn my_application(&self, token: &str) -> AppResult<Option<InstructorApplication>> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let mut own = self
            .platform
            .applications
            .filter(|a| a.user_id == user.id)
            .await;
        Ok(own.pop())
    }

    async fn create_course(&self, token: &str, draft: CourseDraft) -> AppResult<Course> {
        super::simulate_latency(self.latency).await;

        let user = self
            .platform
            .authenticate_role(token, Role::Instructor)
            .await?;

        if draft.title.trim().is_empty() {
            return Err(AppError::validation("Course title is required"));
        }

        let course = draft.into_course(user.id);
        self.platform.courses.insert(course.id, course.clone()).await;
        Ok(course)
    }

    async fn submit_for_review(&self, token: &str, course_id: Uuid) -> AppResult<Course> {
        super::simulate_latency(self.latency).await;

        let user = self
            .platform
            .authenticate_role(token, Role::Instructor)
            .await?;

        let course = self.platform.courses.get(course_id).await.ok_or_not_found()?;
        if course.instructor_id != user.id {
            return Err(AppError::Forbidden);
        }
        if course.status != CourseStatus::Draft && course.status != CourseStatus::Rejected {
            return Err(AppError::bad_request("Course is not a draft"));
        }

        self.platform
            .courses
            .mutate(course_id, Course::submit_for_review)
            .await
            .ok_or_not_found()
    }

    async fn my_courses(&self, token: &str) -> AppResult<Vec<Course>> {
        super::simulate_latency(self.latency).await;

        let user = self
            .platform
            .authenticate_role(token, Role::Instructor)
            .await?;
        Ok(self
            .platform
            .courses
            .filter(|c| c.instructor_id == user.id)
            .await)
    }
}

//! Course catalog facade: browsing, search, and enrollment.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Course, Enrollment};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Platform, Repository};
use crate::types::{Paginated, PaginationParams};

/// Course catalog operations
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Published courses, paginated and optionally filtered by a search
    /// term. Public: no token required.
    async fn catalog(
        &self,
        params: &PaginationParams,
        search: Option<&str>,
    ) -> AppResult<Paginated<Course>>;

    /// A single published course
    async fn course(&self, id: Uuid) -> AppResult<Course>;

    /// Enroll the student in a free course; paid courses go through
    /// checkout instead
    async fn enroll(&self, token: &str, course_id: Uuid) -> AppResult<Enrollment>;

    /// The student's enrollments
    async fn my_enrollments(&self, token: &str) -> AppResult<Vec<Enrollment>>;
}

/// In-memory implementation of [`CourseService`]
pub struct CourseCatalog {
    platform: Arc<Platform>,
    latency: Duration,
}

impl CourseCatalog {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl CourseService for CourseCatalog {
    async fn catalog(
        &self,
        params: &PaginationParams,
        search: Option<&str>,
    ) -> AppResult<Paginated<Course>> {
        super::simulate_latency(self.latency).await;

        let term = search.map(str::to_lowercase);
        let courses = self
            .platform
            .courses
            .filter(|course| {
                course.is_published()
                    && term
                        .as_deref()
                        .map(|t| course.title.to_lowercase().contains(t))
                        .unwrap_or(true)
            })
            .await;

        Ok(Paginated::from_all(courses, params))
    }

    async fn course(&self, id: Uuid) -> AppResult<Course> {
        super::simulate_latency(self.latency).await;

        self.platform
            .courses
            .get(id)
            .await
            .filter(Course::is_published)
            .ok_or_not_found()
    }

    async fn enroll(&self, token: &str, course_id: Uuid) -> AppResult<Enrollment> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let course = self
            .platform
            .courses
            .get(course_id)
            .await
            .filter(Course::is_published)
            .ok_or_not_found()?;

        if !course.is_free() {
            return Err(AppError::bad_request(
                "This course is paid; complete checkout to enroll",
            ));
        }
        if self.platform.enrollment_for(user.id, course_id).await.is_some() {
            return Err(AppError::conflict("Enrollment"));
        }

        let enrollment = Enrollment::new(user.id, course_id);
        self.platform
            .enrollments
            .insert(enrollment.id, enrollment.clone())
            .await;

        Ok(enrollment)
    }

    async fn my_enrollments(&self, token: &str) -> AppResult<Vec<Enrollment>> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        Ok(self
            .platform
            .enrollments
            .filter(|e| e.user_id == user.id)
            .await)
    }
}

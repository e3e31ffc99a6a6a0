//! Learning facade: lessons, progress, and quiz grading.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Lesson, QuizResult, QuizSheet};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Platform, Repository};

/// Learning player operations. All of them require an enrollment in the
/// course being studied.
#[async_trait]
pub trait LearningService: Send + Sync {
    /// Lessons of an enrolled course, in position order
    async fn lessons(&self, token: &str, course_id: Uuid) -> AppResult<Vec<Lesson>>;

    /// Mark a lesson completed; returns the updated progress percentage
    async fn complete_lesson(
        &self,
        token: &str,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<u32>;

    /// The course quiz as presented to the client (no answer key)
    async fn quiz(&self, token: &str, course_id: Uuid) -> AppResult<QuizSheet>;

    /// Grade a full set of answers (question id -> chosen choice index)
    async fn submit_quiz(
        &self,
        token: &str,
        quiz_id: Uuid,
        answers: &HashMap<Uuid, usize>,
    ) -> AppResult<QuizResult>;
}

/// In-memory implementation of [`LearningService`]
pub struct Classroom {
    platform: Arc<Platform>,
    latency: Duration,
}

impl Classroom {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }

    async fn require_enrollment(&self, token: &str, course_id: Uuid) -> AppResult<Uuid> {
        let user = self.platform.authenticate(token).await?;
        self.platform
            .enrollment_for(user.id, course_id)
            .await
            .map(|_| user.id)
            .ok_or(AppError::Forbidden)
    }
}

#[async_trait]
impl LearningService for Classroom {
    async fn lessons(&self, token: &str, course_id: Uuid) -> AppResult<Vec<Lesson>> {
        super::simulate_latency(self.latency).await;

        self.require_enrollment(token, course_id).await?;
        let course = self.platform.courses.get(course_id).await.ok_or_not_found()?;

        let mut lessons = course.lessons;
        lessons.sort_by_key(|l| l.position);
        Ok(lessons)
    }

    async fn complete_lesson(
        &self,
        token: &str,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> AppResult<u32> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let course = self.platform.courses.get(course_id).await.ok_or_not_found()?;
        if !course.lessons.iter().any(|l| l.id == lesson_id) {
            return Err(AppError::NotFound);
        }

        let enrollment = self
            .platform
            .enrollment_for(user.id, course_id)
            .await
            .ok_or(AppError::Forbidden)?;

        let updated = self
            .platform
            .enrollments
            .mutate(enrollment.id, |e| e.complete_lesson(lesson_id))
            .await
            .ok_or(AppError::NotFound)?;

        Ok(updated.progress_percent(course.lessons.len()))
    }

    async fn quiz(&self, token: &str, course_id: Uuid) -> AppResult<QuizSheet> {
        super::simulate_latency(self.latency).await;

        self.require_enrollment(token, course_id).await?;
        let course = self.platform.courses.get(course_id).await.ok_or_not_found()?;
        let quiz_id = course.quiz_id.ok_or_not_found()?;
        let quiz = self.platform.quizzes.get(quiz_id).await.ok_or_not_found()?;

        Ok(quiz.sheet())
    }

    async fn submit_quiz(
        &self,
        token: &str,
        quiz_id: Uuid,
        answers: &HashMap<Uuid, usize>,
    ) -> AppResult<QuizResult> {
        super::simulate_latency(self.latency).await;

        let quiz = self.platform.quizzes.get(quiz_id).await.ok_or_not_found()?;
        self.require_enrollment(token, quiz.course_id).await?;

        if answers.len() != quiz.questions.len()
            || quiz.questions.iter().any(|q| !answers.contains_key(&q.id))
        {
            return Err(AppError::validation(
                "All questions must be answered before submitting",
            ));
        }

        let total = quiz.questions.len() as u32;
        let correct = quiz
            .questions
            .iter()
            .filter(|q| answers.get(&q.id) == Some(&q.correct_choice))
            .count() as u32;
        let score_percent = if total > 0 { correct * 100 / total } else { 0 };

        Ok(QuizResult {
            quiz_id,
            correct,
            total,
            score_percent,
            passed: score_percent >= quiz.pass_threshold_percent,
        })
    }
}

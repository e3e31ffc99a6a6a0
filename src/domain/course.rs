//! Course catalog entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review/publication state of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    PendingReview,
    Published,
    Rejected,
}

/// A single lesson within a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub position: u32,
    /// Relative path of the lesson video, resolved against the API base URL
    pub video_path: Option<String>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, position: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            position,
            video_path: None,
        }
    }
}

/// Course display record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor_id: Uuid,
    /// Price in the smallest currency unit; 0 means free
    pub price_cents: i64,
    /// Relative path of the thumbnail, resolved against the API base URL
    pub thumbnail_path: Option<String>,
    pub status: CourseStatus,
    pub lessons: Vec<Lesson>,
    pub quiz_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    /// Set when an admin rejects the course
    pub rejection_reason: Option<String>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }

    pub fn is_published(&self) -> bool {
        self.status == CourseStatus::Published
    }

    /// Move a draft into the review queue
    pub fn submit_for_review(&mut self) {
        self.status = CourseStatus::PendingReview;
        self.rejection_reason = None;
    }

    pub fn approve(&mut self) {
        self.status = CourseStatus::Published;
        self.rejection_reason = None;
    }

    pub fn reject(&mut self, reason: String) {
        self.status = CourseStatus::Rejected;
        self.rejection_reason = Some(reason);
    }
}

/// Course creation payload submitted by an instructor
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub lessons: Vec<String>,
}

impl CourseDraft {
    /// Build the draft course entity owned by the given instructor
    pub fn into_course(self, instructor_id: Uuid) -> Course {
        let lessons = self
            .lessons
            .into_iter()
            .enumerate()
            .map(|(i, title)| Lesson::new(title, i as u32 + 1))
            .collect();

        Course {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            instructor_id,
            price_cents: self.price_cents,
            thumbnail_path: None,
            status: CourseStatus::Draft,
            lessons,
            quiz_id: None,
            created_at: Utc::now(),
            rejection_reason: None,
        }
    }
}

/// A student's enrollment in a course, with lesson completion progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    pub completed_lessons: Vec<Uuid>,
}

impl Enrollment {
    pub fn new(user_id: Uuid, course_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            enrolled_at: Utc::now(),
            completed_lessons: Vec::new(),
        }
    }

    /// Record a completed lesson; completing the same lesson twice is a no-op
    pub fn complete_lesson(&mut self, lesson_id: Uuid) {
        if !self.completed_lessons.contains(&lesson_id) {
            self.completed_lessons.push(lesson_id);
        }
    }

    /// Completion percentage over the given lesson count
    pub fn progress_percent(&self, total_lessons: usize) -> u32 {
        if total_lessons == 0 {
            return 0;
        }
        (self.completed_lessons.len() * 100 / total_lessons) as u32
    }
}

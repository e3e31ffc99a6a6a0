//! Instructor application entity and its approval workflow state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-mediated approval state: pending until approved or rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected { reason: String },
}

impl ApprovalStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

/// A student's application to become an instructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub motivation: String,
    /// Relative path of the uploaded CV document
    pub cv_path: String,
    pub status: ApprovalStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl InstructorApplication {
    pub fn new(user_id: Uuid, motivation: String, cv_path: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            motivation,
            cv_path,
            status: ApprovalStatus::Pending,
            submitted_at: Utc::now(),
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    pub fn approve(&mut self, reviewer: Uuid) {
        self.status = ApprovalStatus::Approved;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(Utc::now());
    }

    pub fn reject(&mut self, reviewer: Uuid, reason: String) {
        self.status = ApprovalStatus::Rejected { reason };
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(Utc::now());
    }
}

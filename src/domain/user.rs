//! User domain entity and role types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::routes;

/// User roles enumeration.
///
/// Role comparison is exact-match everywhere. The two admin variants are
/// distinct roles that happen to share the admin area; nothing in the
/// crate matches on the textual form of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    SupportAdmin,
    SystemAdmin,
}

impl Role {
    /// All roles granted access to the admin area
    pub const ADMIN_ROLES: &'static [Role] = &[Role::SupportAdmin, Role::SystemAdmin];

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        Self::ADMIN_ROLES.contains(self)
    }

    /// Dashboard path this role lands on after login or a wrong-area redirect
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => routes::STUDENT_DASHBOARD,
            Role::Instructor => routes::INSTRUCTOR_DASHBOARD,
            Role::SupportAdmin | Role::SystemAdmin => routes::ADMIN_DASHBOARD,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "support_admin" => Ok(Role::SupportAdmin),
            "system_admin" => Ok(Role::SystemAdmin),
            other => Err(AppError::validation(format!("Unknown role: {}", other))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::SupportAdmin => "support_admin",
            Role::SystemAdmin => "system_admin",
        };
        write!(f, "{}", s)
    }
}

/// Account status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Suspended,
}

/// The authenticated user record held in the session.
///
/// The role drives client-side redirect decisions only; the backend
/// enforces authorization independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn new(email: String, full_name: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            full_name,
            role,
            status: AccountStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Update the display name
    pub fn update_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn admin_detection_is_exact_match() {
        assert!(Role::SupportAdmin.is_admin());
        assert!(Role::SystemAdmin.is_admin());
        assert!(!Role::Student.is_admin());
        assert!(!Role::Instructor.is_admin());
    }

    #[test]
    fn dashboard_paths_cover_every_role() {
        assert_eq!(Role::Student.dashboard_path(), "/student/dashboard");
        assert_eq!(Role::Instructor.dashboard_path(), "/instructor/dashboard");
        assert_eq!(Role::SupportAdmin.dashboard_path(), "/admin/dashboard");
        assert_eq!(Role::SystemAdmin.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn role_round_trips_through_display() {
        for role in [
            Role::Student,
            Role::Instructor,
            Role::SupportAdmin,
            Role::SystemAdmin,
        ] {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("superadmin").is_err());
    }
}

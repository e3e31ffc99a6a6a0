//! Role-based route guarding.
//!
//! Each role area (student/instructor/admin) wraps its pages in a guard.
//! The guard never authorizes while the session is still resolving, sends
//! unauthenticated visitors to the login page with the requested path
//! preserved, and sends wrong-role visitors to their own dashboard.

use crate::domain::Role;
use crate::routes;
use crate::session::SessionState;

/// The role area a guard protects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardArea {
    Student,
    Instructor,
    Admin,
}

impl GuardArea {
    /// Whether the role is allowed into this area. Exact-match only: the
    /// admin area admits exactly the enumerated admin roles.
    pub fn admits(&self, role: Role) -> bool {
        match self {
            GuardArea::Student => role == Role::Student,
            GuardArea::Instructor => role == Role::Instructor,
            GuardArea::Admin => role.is_admin(),
        }
    }
}

/// What the guarded layout should do for the current session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: render a loading placeholder, no redirect
    Loading,
    /// No user: navigate to the login page, original path preserved
    RedirectToLogin { to: String },
    /// Wrong role: navigate to the user's own dashboard
    Redirect { to: String },
    /// Render the protected subtree
    Authorized,
}

/// Guard for one role area
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    area: GuardArea,
}

impl RouteGuard {
    pub fn new(area: GuardArea) -> Self {
        Self { area }
    }

    pub fn student() -> Self {
        Self::new(GuardArea::Student)
    }

    pub fn instructor() -> Self {
        Self::new(GuardArea::Instructor)
    }

    pub fn admin() -> Self {
        Self::new(GuardArea::Admin)
    }

    /// Decide what to do for the given session state and requested path
    pub fn decide(&self, state: &SessionState, requested_path: &str) -> GuardOutcome {
        match state {
            SessionState::Loading => GuardOutcome::Loading,
            SessionState::Unauthenticated => GuardOutcome::RedirectToLogin {
                to: routes::login_with_redirect(requested_path),
            },
            SessionState::Authenticated(user) => {
                if self.area.admits(user.role) {
                    GuardOutcome::Authorized
                } else {
                    let to = user.role.dashboard_path().to_string();
                    tracing::debug!(
                        role = %user.role,
                        area = ?self.area,
                        %to,
                        "Redirecting wrong-role visit"
                    );
                    GuardOutcome::Redirect { to }
                }
            }
        }
    }
}

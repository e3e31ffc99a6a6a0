//! Student dashboard summary.
//!
//! The dashboard issues its independent fetches concurrently and renders
//! only once all of them have completed.

use crate::domain::{AuthenticatedUser, Enrollment, Transaction};
use crate::errors::AppResult;
use crate::services::{Gateway, ServiceContainer};

/// Everything the student dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub profile: AuthenticatedUser,
    pub enrollments: Vec<Enrollment>,
    pub transactions: Vec<Transaction>,
}

/// Load the dashboard summary with one authenticated token pass.
pub async fn load_student_dashboard(
    gateway: &Gateway,
    services: &dyn ServiceContainer,
) -> AppResult<DashboardSummary> {
    let users = services.users();
    let courses = services.courses();
    let payments = services.payments();

    gateway
        .with_token(|token| async move {
            let (profile, enrollments, transactions) = tokio::try_join!(
                users.profile(&token),
                courses.my_enrollments(&token),
                payments.transactions(&token),
            )?;

            Ok(DashboardSummary {
                profile,
                enrollments,
                transactions,
            })
        })
        .await
}

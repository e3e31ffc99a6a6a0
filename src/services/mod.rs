//! Service facades: one async trait per backend concern, mirrored 1:1 by
//! the in-memory implementations that stand in for the REST backend.

pub mod admin_service;
pub mod auth_service;
pub mod container;
pub mod course_service;
pub mod flashcard_service;
pub mod gateway;
pub mod instructor_service;
pub mod learning_service;
pub mod payment_service;
pub mod user_service;

pub use admin_service::{AdminConsole, AdminService, ReviewDecision};
pub use auth_service::{AuthService, Authenticator};
pub use container::{ServiceContainer, Services};
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
pub use course_service::{CourseCatalog, CourseService};
pub use flashcard_service::{DeckLibrary, FlashcardService};
pub use gateway::Gateway;
pub use instructor_service::{InstructorDesk, InstructorService};
pub use learning_service::{Classroom, LearningService};
pub use payment_service::{PaymentProcessor, PaymentService};
pub use user_service::{UserManager, UserService};

use std::time::Duration;

/// Simulated backend latency; a zero duration skips the sleep entirely
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

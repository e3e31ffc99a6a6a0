//! Service container: centralized access to all facades.
//!
//! Pages depend on the container trait, not on concrete implementations,
//! so the in-memory backend and a future HTTP-backed one are
//! interchangeable.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::infra::Platform;

use super::{
    AdminConsole, AdminService, AuthService, Authenticator, Classroom, CourseCatalog,
    CourseService, DeckLibrary, FlashcardService, InstructorDesk, InstructorService,
    LearningService, PaymentProcessor, PaymentService, UserManager, UserService,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get course catalog service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get payment service
    fn payments(&self) -> Arc<dyn PaymentService>;

    /// Get learning player service
    fn learning(&self) -> Arc<dyn LearningService>;

    /// Get flashcard service
    fn flashcards(&self) -> Arc<dyn FlashcardService>;

    /// Get instructor service
    fn instructors(&self) -> Arc<dyn InstructorService>;

    /// Get admin service
    fn admin(&self) -> Arc<dyn AdminService>;

    /// Get user profile service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    course_service: Arc<dyn CourseService>,
    payment_service: Arc<dyn PaymentService>,
    learning_service: Arc<dyn LearningService>,
    flashcard_service: Arc<dyn FlashcardService>,
    instructor_service: Arc<dyn InstructorService>,
    admin_service: Arc<dyn AdminService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Wire every facade over one shared in-memory platform.
    ///
    /// The configured mock latency applies uniformly; tests pass a config
    /// with zero latency.
    pub fn in_memory(platform: Arc<Platform>, config: &Config) -> Self {
        let latency = Duration::from_millis(config.mock_latency_ms);

        Self {
            auth_service: Arc::new(Authenticator::new(platform.clone(), latency)),
            course_service: Arc::new(CourseCatalog::new(platform.clone(), latency)),
            payment_service: Arc::new(PaymentProcessor::new(platform.clone(), latency)),
            learning_service: Arc::new(Classroom::new(platform.clone(), latency)),
            flashcard_service: Arc::new(DeckLibrary::new(platform.clone(), latency)),
            instructor_service: Arc::new(InstructorDesk::new(platform.clone(), latency)),
            admin_service: Arc::new(AdminConsole::new(platform.clone(), latency)),
            user_service: Arc::new(UserManager::new(platform, latency)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn payments(&self) -> Arc<dyn PaymentService> {
        self.payment_service.clone()
    }

    fn learning(&self) -> Arc<dyn LearningService> {
        self.learning_service.clone()
    }

    fn flashcards(&self) -> Arc<dyn FlashcardService> {
        self.flashcard_service.clone()
    }

    fn instructors(&self) -> Arc<dyn InstructorService> {
        self.instructor_service.clone()
    }

    fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}

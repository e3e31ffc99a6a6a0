//! Core domain entities shared across the client.

pub mod application;
pub mod course;
pub mod learning;
pub mod payment;
pub mod session;
pub mod user;

pub use application::{ApprovalStatus, InstructorApplication};
pub use course::{Course, CourseDraft, CourseStatus, Enrollment, Lesson};
pub use learning::{
    DeckStats, Flashcard, FlashcardDeck, QuestionPrompt, Quiz, QuizQuestion, QuizResult,
    QuizSheet, ReviewOutcome, ReviewRecord,
};
pub use payment::{CheckoutSession, Transaction, TransactionStatus};
pub use session::Session;
pub use user::{AccountStatus, AuthenticatedUser, Role};

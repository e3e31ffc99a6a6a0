//! Local state machines driving the study flows.

pub mod flashcards;
pub mod quiz;

pub use flashcards::{StudySession, StudySummary, StudyView};
pub use quiz::{QuizFlow, QuizState};

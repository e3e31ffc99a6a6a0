//! Learning entities: quizzes and flashcard decks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::QUIZ_PASS_THRESHOLD_PERCENT;

/// A quiz question together with its answer key.
///
/// This is the backend-side shape; clients only ever receive
/// [`QuestionPrompt`], which omits the correct choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_choice: usize,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, choices: Vec<String>, correct_choice: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            choices,
            correct_choice,
        }
    }
}

/// A quiz attached to a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub pass_threshold_percent: u32,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn new(course_id: Uuid, title: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            title: title.into(),
            pass_threshold_percent: QUIZ_PASS_THRESHOLD_PERCENT,
            questions,
        }
    }

    /// Client-facing view of the quiz, without the answer key
    pub fn sheet(&self) -> QuizSheet {
        QuizSheet {
            id: self.id,
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| QuestionPrompt {
                    id: q.id,
                    prompt: q.prompt.clone(),
                    choices: q.choices.clone(),
                })
                .collect(),
        }
    }
}

/// A question as presented to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub id: Uuid,
    pub prompt: String,
    pub choices: Vec<String>,
}

/// The quiz as presented to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSheet {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<QuestionPrompt>,
}

/// Graded quiz outcome returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: Uuid,
    pub correct: u32,
    pub total: u32,
    pub score_percent: u32,
    pub passed: bool,
}

/// A single flashcard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A deck of flashcards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardDeck {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub cards: Vec<Flashcard>,
}

/// Outcome of a single flashcard review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Known,
    Unknown,
}

/// A recorded review, submitted to the backend for scheduling purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub card_id: Uuid,
    pub outcome: ReviewOutcome,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(user_id: Uuid, card_id: Uuid, outcome: ReviewOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            card_id,
            outcome,
            reviewed_at: Utc::now(),
        }
    }
}

/// Aggregated review tallies for a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckStats {
    pub reviews: u32,
    pub known: u32,
    pub unknown: u32,
}

//! Flashcard study state machine.
//!
//! A card starts front side up; flipping reveals the back; grading it as
//! known or unknown submits the review outcome to the backend and
//! advances to the next card. The session terminates when the deck is
//! exhausted.

use std::sync::Arc;

use crate::domain::{Flashcard, FlashcardDeck, ReviewOutcome};
use crate::errors::{AppError, AppResult};
use crate::services::FlashcardService;

/// What the study page renders
#[derive(Debug, PartialEq)]
pub enum StudyView<'a> {
    Card {
        card: &'a Flashcard,
        flipped: bool,
        /// 1-based position within the deck
        position: usize,
        total: usize,
    },
    Finished(StudySummary),
}

/// Tallies shown when the deck is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudySummary {
    pub known: u32,
    pub unknown: u32,
}

/// One pass through a deck
pub struct StudySession {
    service: Arc<dyn FlashcardService>,
    token: String,
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
    summary: StudySummary,
}

impl StudySession {
    pub fn new(deck: FlashcardDeck, service: Arc<dyn FlashcardService>, token: String) -> Self {
        Self {
            service,
            token,
            cards: deck.cards,
            index: 0,
            flipped: false,
            summary: StudySummary::default(),
        }
    }

    /// Current view state
    pub fn view(&self) -> StudyView<'_> {
        match self.cards.get(self.index) {
            Some(card) => StudyView::Card {
                card,
                flipped: self.flipped,
                position: self.index + 1,
                total: self.cards.len(),
            },
            None => StudyView::Finished(self.summary),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.cards.len()
    }

    /// Toggle answer visibility on the current card
    pub fn flip(&mut self) {
        if !self.is_finished() {
            self.flipped = !self.flipped;
        }
    }

    /// Grade the current card, submit the outcome, and advance.
    ///
    /// The review is recorded before advancing; a failed submission keeps
    /// the session on the current card so the outcome is not lost.
    pub async fn grade(&mut self, outcome: ReviewOutcome) -> AppResult<()> {
        let card = self
            .cards
            .get(self.index)
            .ok_or_else(|| AppError::bad_request("The deck is already finished"))?;

        self.service
            .record_review(&self.token, card.id, outcome)
            .await?;

        match outcome {
            ReviewOutcome::Known => self.summary.known += 1,
            ReviewOutcome::Unknown => self.summary.unknown += 1,
        }
        self.index += 1;
        self.flipped = false;
        Ok(())
    }
}

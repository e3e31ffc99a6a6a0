//! Flashcard facade: decks, cards, and review submission.
//!
//! Review outcomes are submitted to the backend per card; the
//! spaced-repetition scheduling they feed is the backend's concern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DeckStats, FlashcardDeck, ReviewOutcome, ReviewRecord};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Platform, Repository};

/// Flashcard operations
#[async_trait]
pub trait FlashcardService: Send + Sync {
    /// All decks visible to the user
    async fn decks(&self, token: &str) -> AppResult<Vec<FlashcardDeck>>;

    /// A single deck with its cards
    async fn deck(&self, token: &str, deck_id: Uuid) -> AppResult<FlashcardDeck>;

    /// Record one review outcome for a card
    async fn record_review(
        &self,
        token: &str,
        card_id: Uuid,
        outcome: ReviewOutcome,
    ) -> AppResult<()>;

    /// The user's review tallies for a deck
    async fn deck_stats(&self, token: &str, deck_id: Uuid) -> AppResult<DeckStats>;
}

/// In-memory implementation of [`FlashcardService`]
pub struct DeckLibrary {
    platform: Arc<Platform>,
    latency: Duration,
}

impl DeckLibrary {
    pub fn new(platform: Arc<Platform>, latency: Duration) -> Self {
        Self { platform, latency }
    }
}

#[async_trait]
impl FlashcardService for DeckLibrary {
    async fn decks(&self, token: &str) -> AppResult<Vec<FlashcardDeck>> {
        super::simulate_latency(self.latency).await;

        self.platform.authenticate(token).await?;
        Ok(self.platform.decks.list().await)
    }

    async fn deck(&self, token: &str, deck_id: Uuid) -> AppResult<FlashcardDeck> {
        super::simulate_latency(self.latency).await;

        self.platform.authenticate(token).await?;
        self.platform.decks.get(deck_id).await.ok_or_not_found()
    }

    async fn record_review(
        &self,
        token: &str,
        card_id: Uuid,
        outcome: ReviewOutcome,
    ) -> AppResult<()> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;

        let card_exists = self
            .platform
            .decks
            .find(|deck| deck.cards.iter().any(|c| c.id == card_id))
            .await
            .is_some();
        if !card_exists {
            return Err(AppError::NotFound);
        }

        let record = ReviewRecord::new(user.id, card_id, outcome);
        self.platform.reviews.insert(record.id, record).await;
        Ok(())
    }

    async fn deck_stats(&self, token: &str, deck_id: Uuid) -> AppResult<DeckStats> {
        super::simulate_latency(self.latency).await;

        let user = self.platform.authenticate(token).await?;
        let deck = self.platform.decks.get(deck_id).await.ok_or_not_found()?;
        let card_ids: Vec<Uuid> = deck.cards.iter().map(|c| c.id).collect();

        let records = self
            .platform
            .reviews
            .filter(|r| r.user_id == user.id && card_ids.contains(&r.card_id))
            .await;

        let known = records
            .iter()
            .filter(|r| r.outcome == ReviewOutcome::Known)
            .count() as u32;

        Ok(DeckStats {
            reviews: records.len() as u32,
            known,
            unknown: records.len() as u32 - known,
        })
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use fd_review::{DeckId, Flashcard, SessionSummary};
use tokio::sync::RwLock;

use crate::{CardSource, ResultsSink, StoreError, models::DeckSummary, seed};

#[derive(Debug)]
struct StoredDeck {
    id: DeckId,
    name: String,
    cards: Vec<Flashcard>,
}

impl StoredDeck {
    fn summary(&self) -> DeckSummary {
        DeckSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            card_count: self.cards.len(),
        }
    }
}

/// In-memory card source and results sink.
///
/// Decks are fixed once the store is built. Recorded summaries live for the
/// lifetime of the store and are not persisted anywhere.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    decks: Vec<StoredDeck>,
    results: RwLock<HashMap<DeckId, Vec<SessionSummary>>>,
}

impl InMemoryStore {
    /// An empty store with no decks
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample decks from [`seed::sample_decks`]
    pub fn with_sample_decks() -> Self {
        seed::sample_decks()
            .into_iter()
            .fold(Self::new(), |store, deck| {
                store.with_deck(deck.id, deck.name, deck.cards)
            })
    }

    /// Add a deck, replacing any deck with the same id.
    pub fn with_deck(
        mut self,
        id: impl Into<DeckId>,
        name: impl Into<String>,
        cards: Vec<Flashcard>,
    ) -> Self {
        let deck = StoredDeck {
            id: id.into(),
            name: name.into(),
            cards,
        };

        match self.decks.iter_mut().find(|d| d.id == deck.id) {
            Some(existing) => *existing = deck,
            None => self.decks.push(deck),
        }

        self
    }

    fn find(&self, deck_id: &DeckId) -> Result<&StoredDeck, StoreError> {
        self.decks
            .iter()
            .find(|d| &d.id == deck_id)
            .ok_or_else(|| StoreError::DeckNotFound(deck_id.clone()))
    }
}

#[async_trait]
impl CardSource for InMemoryStore {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, StoreError> {
        Ok(self.decks.iter().map(StoredDeck::summary).collect())
    }

    async fn get_deck(&self, deck_id: &DeckId) -> Result<DeckSummary, StoreError> {
        self.find(deck_id).map(StoredDeck::summary)
    }

    async fn load_cards(&self, deck_id: &DeckId) -> Result<Vec<Flashcard>, StoreError> {
        self.find(deck_id).map(|d| d.cards.clone())
    }
}

#[async_trait]
impl ResultsSink for InMemoryStore {
    async fn record(&self, summary: SessionSummary) -> Result<(), StoreError> {
        // Summaries for decks that were never stored are rejected
        self.find(&summary.deck_id)?;

        tracing::debug!(
            deck_id = %summary.deck_id,
            correct = summary.correct_count,
            total = summary.total_count,
            "recording session summary"
        );

        self.results
            .write()
            .await
            .entry(summary.deck_id.clone())
            .or_default()
            .push(summary);

        Ok(())
    }

    async fn list_for_deck(&self, deck_id: &DeckId) -> Result<Vec<SessionSummary>, StoreError> {
        self.find(deck_id)?;

        Ok(self
            .results
            .read()
            .await
            .get(deck_id)
            .cloned()
            .unwrap_or_default())
    }
}

//! Data providers consumed by the review engine.
//!
//! The engine itself never reaches for cards or writes results; callers go
//! through a [`CardSource`] to build a session and hand the finished
//! [`SessionSummary`](fd_review::SessionSummary) to a [`ResultsSink`].

pub mod memory;
/// Read models returned by card sources
pub mod models;
pub mod seed;

use async_trait::async_trait;
use fd_review::{DeckId, Flashcard, SessionSummary};
use thiserror::Error;

pub use memory::InMemoryStore;
pub use models::DeckSummary;

/// Failures reported by a [`CardSource`] or [`ResultsSink`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No deck with this id exists
    #[error("deck not found: {0}")]
    DeckNotFound(DeckId),
}

/// Read access to decks and their cards.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// List every deck, in display order
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, StoreError>;

    /// Name and card count of a single deck
    async fn get_deck(&self, deck_id: &DeckId) -> Result<DeckSummary, StoreError>;

    /// Load the full ordered card sequence of a deck.
    ///
    /// An existing deck with no cards yields an empty sequence, not an error.
    async fn load_cards(&self, deck_id: &DeckId) -> Result<Vec<Flashcard>, StoreError>;
}

/// Destination for summaries of completed sessions.
#[async_trait]
pub trait ResultsSink: Send + Sync {
    /// Store the summary of one completed session.
    ///
    /// Callers may retry after an error, so a failed call must not have
    /// stored anything.
    async fn record(&self, summary: SessionSummary) -> Result<(), StoreError>;

    /// Recorded summaries for a deck, oldest first
    async fn list_for_deck(&self, deck_id: &DeckId) -> Result<Vec<SessionSummary>, StoreError>;
}

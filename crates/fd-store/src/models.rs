use fd_review::DeckId;
use serde::{Deserialize, Serialize};

/// Deck model - a named collection of flashcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Deck ID
    pub id: DeckId,
    /// Deck name
    pub name: String,
    /// Number of cards in the deck
    pub card_count: usize,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a deck
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    /// Wrap any string as a deck id. No format is imposed.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id as given to [`DeckId::new`]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DeckId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeckId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Flashcard model - a prompt on the front and its answer on the back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique card identifier
    pub id: String,
    /// Prompt text
    pub front: String,
    /// Answer text
    pub back: String,
}

impl Flashcard {
    /// Build a card from its id, prompt and answer
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A card paired with its position in the session sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewItem<'a> {
    /// 0-based position in the session's card sequence
    pub index: usize,
    pub card: &'a Flashcard,
}

/// Outcome recorded for one card, in review order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub flashcard: Flashcard,
    /// `true` when the user marked the card as remembered
    pub remembered: bool,
}

/// Where a session sits in its lifecycle.
///
/// `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    Completed,
}

/// "Card X of N" as shown above the current card.
///
/// `position` is 1-based while a card is current and equals `total` once
/// every card has been marked (0 of 0 for an empty deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card {} of {}", self.position, self.total)
    }
}

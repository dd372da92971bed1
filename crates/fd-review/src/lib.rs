//! Review session engine for Flipdeck
//!
//! This crate sequences the cards of a deck through a single review pass:
//! one card at a time, with a reveal toggle for the current card and a
//! remembered / not remembered outcome recorded per card. Once every card
//! has an outcome the session is completed and can be summarized.
//!
//! The engine performs no I/O. Cards are handed in by the caller (usually
//! loaded from a card source) and the summary is handed back for the caller
//! to persist wherever it likes.

pub mod error;
/// Cards, outcomes and the value types a session reports
pub mod model;
pub mod session;
pub mod summary;

pub use error::ReviewError;
pub use model::{DeckId, Flashcard, Progress, ReviewItem, ReviewResult, SessionState};
pub use session::ReviewSession;
pub use summary::{SessionSummary, percentage};

use fd_review::{DeckId, Progress, ReviewResult, ReviewSession, SessionState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /reviews/{session_id}/mark`
#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    /// Outcome for the current card
    pub remembered: bool,
}

/// The current card as shown to the user.
///
/// `back` is only present while the card is revealed.
#[derive(Debug, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    /// 0-based position in the session
    pub index: usize,
    pub front: String,
    pub back: Option<String>,
}

/// Snapshot of a review session returned by every session endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub deck_id: DeckId,
    pub state: SessionState,
    pub progress: Progress,
    pub revealed: bool,
    /// `None` once the session is completed
    pub current_card: Option<CardView>,
    pub results: Vec<ReviewResult>,
}

impl SessionView {
    /// Snapshot `session`, hiding the current card's back unless revealed
    pub fn new(session_id: Uuid, session: &ReviewSession) -> Self {
        let revealed = session.is_revealed();
        let current_card = session.current_card().map(|item| CardView {
            id: item.card.id.clone(),
            index: item.index,
            front: item.card.front.clone(),
            back: revealed.then(|| item.card.back.clone()),
        });

        Self {
            session_id,
            deck_id: session.deck_id().clone(),
            state: session.state(),
            progress: session.progress(),
            revealed,
            current_card,
            results: session.results().to_vec(),
        }
    }
}

use chrono::{DateTime, Utc};

use crate::{
    error::ReviewError,
    model::{DeckId, Flashcard, Progress, ReviewItem, ReviewResult, SessionState},
    summary::SessionSummary,
};

/// One pass through a deck's cards.
///
/// The card sequence is fixed when the session starts and every card is
/// presented exactly once, in that order. Each call to
/// [`mark_card`](Self::mark_card) records one outcome and moves to the next
/// card, so `results().len() == current_index()` holds at all times.
///
/// ```
/// use fd_review::{Flashcard, ReviewSession};
///
/// let cards = vec![
///     Flashcard::new("1", "Hello", "Hola"),
///     Flashcard::new("2", "Goodbye", "Adiós"),
/// ];
/// let mut session = ReviewSession::start("spanish".into(), cards);
///
/// assert!(session.toggle_reveal().unwrap());
/// session.mark_card(true).unwrap();
/// assert!(!session.is_revealed());
/// session.mark_card(false).unwrap();
///
/// let summary = session.summarize().unwrap();
/// assert_eq!(summary.correct_count, 1);
/// assert_eq!(summary.percentage, Some(50));
/// ```
#[derive(Debug, Clone)]
pub struct ReviewSession {
    deck_id: DeckId,
    cards: Vec<Flashcard>,
    current_index: usize,
    revealed: bool,
    results: Vec<ReviewResult>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ReviewSession {
    /// Start a session over `cards`, which becomes a snapshot for the
    /// lifetime of the session.
    ///
    /// An empty sequence yields a session that is already completed.
    pub fn start(deck_id: DeckId, cards: Vec<Flashcard>) -> Self {
        let now = Utc::now();
        let completed_at = cards.is_empty().then_some(now);

        tracing::debug!(deck_id = %deck_id, cards = cards.len(), "review session started");

        Self {
            deck_id,
            cards,
            current_index: 0,
            revealed: false,
            results: Vec::new(),
            started_at: now,
            completed_at,
        }
    }

    /// Flip the reveal state of the current card and return the new state.
    ///
    /// # Errors
    ///
    /// [`ReviewError::InvalidState`] when the session is completed, which
    /// includes sessions started with no cards.
    pub fn toggle_reveal(&mut self) -> Result<bool, ReviewError> {
        if self.is_completed() {
            return Err(ReviewError::InvalidState);
        }

        self.revealed = !self.revealed;
        self.check_invariant();

        Ok(self.revealed)
    }

    /// Record the outcome for the current card and advance.
    ///
    /// The reveal state is reset for the next card. Marking the last card
    /// completes the session.
    ///
    /// # Errors
    ///
    /// [`ReviewError::SessionAlreadyCompleted`] when every card already has
    /// an outcome. Nothing is mutated in that case.
    pub fn mark_card(&mut self, remembered: bool) -> Result<&Self, ReviewError> {
        let Some(card) = self.cards.get(self.current_index) else {
            return Err(ReviewError::SessionAlreadyCompleted);
        };

        tracing::debug!(
            deck_id = %self.deck_id,
            card_id = %card.id,
            remembered,
            "card marked"
        );

        self.results.push(ReviewResult {
            flashcard: card.clone(),
            remembered,
        });
        self.current_index += 1;
        self.revealed = false;

        if self.current_index == self.cards.len() {
            self.completed_at = Some(Utc::now());
            tracing::info!(
                deck_id = %self.deck_id,
                total = self.cards.len(),
                correct = self.correct_count(),
                "review session completed"
            );
        }

        self.check_invariant();

        Ok(&*self)
    }

    /// Compute the summary of a completed session.
    ///
    /// # Errors
    ///
    /// [`ReviewError::SessionNotComplete`] while cards remain.
    pub fn summarize(&self) -> Result<SessionSummary, ReviewError> {
        match self.completed_at {
            Some(completed_at) => Ok(SessionSummary::new(
                self.deck_id.clone(),
                self.results.clone(),
                self.started_at,
                completed_at,
            )),
            None => Err(ReviewError::SessionNotComplete),
        }
    }

    /// Deck the session was started from
    pub fn deck_id(&self) -> &DeckId {
        &self.deck_id
    }

    /// The card sequence captured at start, in review order
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Index of the current card. Equals the card count once completed.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The card waiting for an outcome, if any.
    pub fn current_card(&self) -> Option<ReviewItem<'_>> {
        self.cards.get(self.current_index).map(|card| ReviewItem {
            index: self.current_index,
            card,
        })
    }

    /// Whether the back of the current card is showing
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Outcomes so far, one per marked card, in review order
    pub fn results(&self) -> &[ReviewResult] {
        &self.results
    }

    /// `true` once every card has been marked. An empty session starts
    /// out completed.
    pub fn is_completed(&self) -> bool {
        self.current_index == self.cards.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_completed() {
            SessionState::Completed
        } else {
            SessionState::InProgress
        }
    }

    /// Position of the current card out of the total, see [`Progress`]
    pub fn progress(&self) -> Progress {
        let total = self.cards.len();
        Progress {
            position: (self.current_index + 1).min(total),
            total,
        }
    }

    /// Number of cards still waiting for an outcome
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Set when the session completes, never cleared
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.remembered).count()
    }

    fn check_invariant(&self) {
        debug_assert_eq!(self.results.len(), self.current_index);
        debug_assert!(self.current_index <= self.cards.len());
        debug_assert_eq!(self.completed_at.is_some(), self.is_completed());
        debug_assert!(!(self.revealed && self.is_completed()));
    }
}

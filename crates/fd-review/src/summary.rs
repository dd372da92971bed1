use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{DeckId, ReviewResult};

/// Aggregate statistics of a completed review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Deck the session was started from
    pub deck_id: DeckId,
    /// Cards marked as remembered
    pub correct_count: usize,
    /// Cards marked as not remembered
    pub incorrect_count: usize,
    /// Cards in the session
    pub total_count: usize,
    /// Share of remembered cards, `None` for an empty session
    pub percentage: Option<u8>,
    /// Every outcome, in review order
    pub results: Vec<ReviewResult>,
    pub started_at: DateTime<Utc>,
    /// When the last card was marked, or the start time for an empty deck
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    pub(crate) fn new(
        deck_id: DeckId,
        results: Vec<ReviewResult>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let total_count = results.len();
        let correct_count = results.iter().filter(|r| r.remembered).count();

        Self {
            deck_id,
            correct_count,
            incorrect_count: total_count - correct_count,
            total_count,
            percentage: percentage(correct_count, total_count),
            results,
            started_at,
            completed_at,
        }
    }
}

/// Round `100 * correct / total` to the nearest integer, halves rounding up.
///
/// Returns `None` when `total` is zero.
///
/// ```
/// use fd_review::percentage;
///
/// assert_eq!(percentage(2, 3), Some(67));
/// assert_eq!(percentage(1, 8), Some(13));
/// assert_eq!(percentage(0, 0), None);
/// ```
pub fn percentage(correct: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }

    let correct = correct.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * correct + total) / (2 * total);

    u8::try_from(rounded).ok()
}

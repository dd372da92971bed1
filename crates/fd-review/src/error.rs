use thiserror::Error;

/// Contract violations raised by [`crate::ReviewSession`].
///
/// All of these are caller errors: the session is left untouched when one
/// is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewError {
    /// Reveal attempted on a session with no current card.
    #[error("review session has no current card")]
    InvalidState,
    /// A card was marked after every card already has an outcome.
    #[error("review session is already completed")]
    SessionAlreadyCompleted,
    /// Summary requested while cards are still waiting for an outcome.
    #[error("review session is not completed yet")]
    SessionNotComplete,
}

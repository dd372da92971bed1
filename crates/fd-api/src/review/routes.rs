use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use fd_review::{DeckId, ReviewSession, SessionSummary};
use uuid::Uuid;

use crate::{ApiState, error::ApiError, metrics};

use super::{
    model::{MarkRequest, SessionView},
    registry::{SessionHandle, TrackedSession},
};

/// Create the review session routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/decks/{deck_id}/reviews", post(start_review))
        .route(
            "/reviews/{session_id}",
            get(get_review).delete(discard_review),
        )
        .route("/reviews/{session_id}/reveal", post(toggle_reveal))
        .route("/reviews/{session_id}/mark", post(mark_card))
        .route("/reviews/{session_id}/summary", get(get_summary))
}

async fn session_handle(state: &ApiState, session_id: Uuid) -> Result<SessionHandle, ApiError> {
    state
        .sessions
        .get(session_id)
        .await
        .ok_or(ApiError::SessionNotFound(session_id))
}

/// Hand the summary of a completed session to the results sink, once.
///
/// A sink failure leaves the session completed and `summary_recorded`
/// unset, so a later read of the session retries the hand-off.
async fn record_if_completed(state: &ApiState, session_id: Uuid, tracked: &mut TrackedSession) {
    if tracked.summary_recorded {
        return;
    }
    let Ok(summary) = tracked.session.summarize() else {
        return;
    };

    let percentage = summary.percentage;
    match state.results.record(summary).await {
        Ok(()) => {
            tracked.summary_recorded = true;
            metrics::record_session_completed(percentage);
        }
        Err(e) => {
            metrics::record_summary_failed();
            tracing::warn!(
                session_id = %session_id,
                error = %e,
                "Failed to record session summary, will retry"
            );
        }
    }
}

/// Start a review session over the current cards of a deck
async fn start_review(
    State(state): State<ApiState>,
    Path(deck_id): Path<DeckId>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let cards = state.cards.load_cards(&deck_id).await?;
    let session = ReviewSession::start(deck_id, cards);
    metrics::record_session_started();

    let (session_id, handle) = state.sessions.insert(session).await;
    let mut tracked = handle.lock().await;

    // An empty deck starts out completed
    record_if_completed(&state, session_id, &mut tracked).await;

    tracing::info!(
        session_id = %session_id,
        deck_id = %tracked.session.deck_id(),
        cards = tracked.session.cards().len(),
        "review session created"
    );

    Ok((
        StatusCode::CREATED,
        Json(SessionView::new(session_id, &tracked.session)),
    ))
}

async fn get_review(
    State(state): State<ApiState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let handle = session_handle(&state, session_id).await?;
    let mut tracked = handle.lock().await;
    tracked.touch();
    record_if_completed(&state, session_id, &mut tracked).await;

    Ok(Json(SessionView::new(session_id, &tracked.session)))
}

async fn toggle_reveal(
    State(state): State<ApiState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let handle = session_handle(&state, session_id).await?;
    let mut tracked = handle.lock().await;
    tracked.touch();

    tracked.session.toggle_reveal()?;

    Ok(Json(SessionView::new(session_id, &tracked.session)))
}

async fn mark_card(
    State(state): State<ApiState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let handle = session_handle(&state, session_id).await?;
    let mut tracked = handle.lock().await;
    tracked.touch();

    tracked.session.mark_card(payload.remembered)?;
    metrics::record_card_marked(payload.remembered);

    record_if_completed(&state, session_id, &mut tracked).await;

    Ok(Json(SessionView::new(session_id, &tracked.session)))
}

async fn get_summary(
    State(state): State<ApiState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let handle = session_handle(&state, session_id).await?;
    let mut tracked = handle.lock().await;
    tracked.touch();

    let summary = tracked.session.summarize()?;
    record_if_completed(&state, session_id, &mut tracked).await;

    Ok(Json(summary))
}

/// Discard a session, finished or not. Partial sessions are not saved.
async fn discard_review(
    State(state): State<ApiState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions.remove(session_id).await {
        return Err(ApiError::SessionNotFound(session_id));
    }

    tracing::info!(session_id = %session_id, "review session discarded");

    Ok(StatusCode::NO_CONTENT)
}

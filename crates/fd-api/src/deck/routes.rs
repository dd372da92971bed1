use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use fd_review::{DeckId, Flashcard, SessionSummary};
use fd_store::DeckSummary;

use crate::{ApiState, error::ApiError};

/// Create the deck routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/decks", get(list_decks))
        .route("/decks/{deck_id}", get(get_deck))
        .route("/decks/{deck_id}/cards", get(list_cards))
        .route("/decks/{deck_id}/results", get(list_results))
}

/// Get all decks
async fn list_decks(State(state): State<ApiState>) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    Ok(Json(state.cards.list_decks().await?))
}

/// Get deck by ID
async fn get_deck(
    State(state): State<ApiState>,
    Path(deck_id): Path<DeckId>,
) -> Result<Json<DeckSummary>, ApiError> {
    Ok(Json(state.cards.get_deck(&deck_id).await?))
}

/// Get the cards of a deck, in review order
async fn list_cards(
    State(state): State<ApiState>,
    Path(deck_id): Path<DeckId>,
) -> Result<Json<Vec<Flashcard>>, ApiError> {
    Ok(Json(state.cards.load_cards(&deck_id).await?))
}

/// Get the summaries of completed sessions for a deck
async fn list_results(
    State(state): State<ApiState>,
    Path(deck_id): Path<DeckId>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    Ok(Json(state.results.list_for_deck(&deck_id).await?))
}

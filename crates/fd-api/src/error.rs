use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fd_review::ReviewError;
use fd_store::StoreError;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by request handlers, rendered as `{"error": "..."}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Review session not found: {0}")]
    SessionNotFound(Uuid),
}

impl ApiError {
    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            // Contract violations on a session surface as conflicts with its current state
            Self::Review(_) => StatusCode::CONFLICT,
            Self::Store(StoreError::DeckNotFound(_)) | Self::SessionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::debug!(error = %self, status = status.as_u16(), "request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    config::ApiConfig,
    deck,
    middleware::{
        cors::create_cors_layer, request_id::request_id_middleware,
        security_headers::apply_security_headers,
    },
    review,
    state::ApiState,
};

/// Every route without middleware or state
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(deck::routes())
        .merge(review::routes())
        .fallback(handler_404)
}

/// The full application: routes plus the middleware stack
pub fn app(state: ApiState, config: &ApiConfig) -> Router {
    let router = router()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.allowed_origins));

    apply_security_headers(router, config.env).with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

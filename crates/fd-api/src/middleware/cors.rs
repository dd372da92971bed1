use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::request_id::REQUEST_ID_HEADER;

/// Creates a CORS layer for the review front end
///
/// # Arguments
/// * `allowed_origins` - List of allowed origin URLs as strings. Entries that
///   are not valid header values are ignored.
///
/// The API is read-mostly plus the session actions, so only GET, POST,
/// DELETE and OPTIONS are allowed. The request id header is exposed so the
/// front end can report it.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_allowed_origin_is_echoed() {
        let app = Router::new()
            .route("/decks", get(|| async { "[]" }))
            .layer(create_cors_layer(&["http://localhost:8081".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/decks")
                    .header(header::ORIGIN, "http://localhost:8081")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:8081"
        );
    }

    #[tokio::test]
    async fn test_unknown_origin_is_not_allowed() {
        let app = Router::new()
            .route("/decks", get(|| async { "[]" }))
            .layer(create_cors_layer(&["http://localhost:8081".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/decks")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}

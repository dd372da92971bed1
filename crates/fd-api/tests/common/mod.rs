use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use fd_api::{
    config::{ApiConfig, Environment},
    router,
    state::ApiState,
};
use fd_review::{DeckId, Flashcard, SessionSummary};
use fd_store::{InMemoryStore, ResultsSink, StoreError};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;

/// Id of the sample deck with the eight Spanish cards
pub const SPANISH_DECK: &str = "1";
/// Id of a deck with no cards, added on top of the samples
pub const EMPTY_DECK: &str = "empty";
/// Id of a small three card deck, added on top of the samples
pub const SMALL_DECK: &str = "small";

/// Test state builder backed by an in-memory store
pub struct TestStateBuilder {
    environment: Environment,
    store: InMemoryStore,
}

/// Sample decks plus the empty and small test decks
pub fn test_store() -> InMemoryStore {
    InMemoryStore::with_sample_decks()
        .with_deck(EMPTY_DECK, "Empty Deck", Vec::new())
        .with_deck(
            SMALL_DECK,
            "Small Deck",
            vec![
                Flashcard::new("a", "Cat", "Chat"),
                Flashcard::new("b", "Dog", "Chien"),
                Flashcard::new("c", "House", "Maison"),
            ],
        )
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            store: test_store(),
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn build(self) -> ApiState {
        ApiState::in_memory(self.environment, self.store)
    }

    /// Serve cards from the test store but hand summaries to `sink`
    pub fn build_with_sink(self, sink: Arc<dyn ResultsSink>) -> ApiState {
        ApiState::new(self.environment, Arc::new(self.store), sink)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Results sink that rejects the first `failures` summaries, then stores
/// the rest in memory
pub struct FlakySink {
    store: InMemoryStore,
    failures_left: AtomicUsize,
}

impl FlakySink {
    pub fn new(failures: usize) -> Self {
        Self {
            store: test_store(),
            failures_left: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl ResultsSink for FlakySink {
    async fn record(&self, summary: SessionSummary) -> Result<(), StoreError> {
        let rejected = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if rejected {
            return Err(StoreError::DeckNotFound(summary.deck_id));
        }
        self.store.record(summary).await
    }

    async fn list_for_deck(&self, deck_id: &DeckId) -> Result<Vec<SessionSummary>, StoreError> {
        self.store.list_for_deck(deck_id).await
    }
}

/// Build the full application (routes and middleware) around a state
pub fn test_app(state: ApiState) -> Router {
    let config = ApiConfig {
        env: state.environment,
        ..ApiConfig::default()
    };
    router::app(state, &config)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Client over a fresh default state
    pub fn default_app() -> (Self, ApiState) {
        let state = TestStateBuilder::new().build();
        (Self::new(test_app(state.clone())), state)
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with no body
    pub async fn post(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Review session helpers
pub mod review {
    use super::*;
    use serde_json::{Value, json};

    /// Start a session on a deck and return the created view
    pub async fn start(client: &TestClient, deck_id: &str) -> Value {
        let response = client.post(&format!("/decks/{deck_id}/reviews")).await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    pub fn session_id(view: &Value) -> String {
        view["session_id"]
            .as_str()
            .expect("view should carry a session id")
            .to_string()
    }

    pub async fn mark(client: &TestClient, session_id: &str, remembered: bool) -> TestResponse {
        client
            .post_json(
                &format!("/reviews/{session_id}/mark"),
                &json!({ "remembered": remembered }),
            )
            .await
    }

    pub async fn reveal(client: &TestClient, session_id: &str) -> TestResponse {
        client.post(&format!("/reviews/{session_id}/reveal")).await
    }
}

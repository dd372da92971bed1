//! Prometheus metrics for request traffic and review activity.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

/// Path label for requests that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        )?
        .set_buckets_for_metric(
            Matcher::Full("review_session_score_percent".to_string()),
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
        )?;

    Ok(builder.install_recorder()?)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(&req);

    gauge!("http_requests_in_flight").increment(1.0);
    let response = next.run(req).await;
    gauge!("http_requests_in_flight").decrement(1.0);

    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// The route template a request matched, such as `/reviews/{session_id}`.
///
/// Only registered templates ever become label values, so the label set
/// stays bounded no matter what paths clients send.
fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_PATH, MatchedPath::as_str)
        .to_owned()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Review activity counters, called from the review handlers
pub fn record_session_started() {
    counter!("review_sessions_started_total").increment(1);
}

pub fn record_card_marked(remembered: bool) {
    let outcome = if remembered {
        "remembered"
    } else {
        "forgotten"
    };

    counter!("review_cards_marked_total", "outcome" => outcome).increment(1);
}

pub fn record_session_completed(percentage: Option<u8>) {
    counter!("review_sessions_completed_total").increment(1);

    if let Some(percentage) = percentage {
        histogram!("review_session_score_percent").record(f64::from(percentage));
    }
}

/// A completed session's summary was rejected by the results sink
pub fn record_summary_failed() {
    counter!("review_summary_record_failures_total").increment(1);
}

/// Idle sessions dropped by the background sweep
pub fn record_sessions_evicted(count: usize) {
    counter!("review_sessions_evicted_total").increment(count as u64);
}

//! Log output for the server.
//!
//! `RUST_LOG` overrides the per-environment default filter, for example
//! `RUST_LOG=fd_review=debug,tower_http=trace`.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Filter used when `RUST_LOG` is unset. Development logs every card the
/// review engine marks; production keeps to session lifecycle events.
fn default_filter(env: Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug",
        Environment::Production => "info,fd_review=info,tower_http=info",
    }
}

/// Install the global subscriber: readable lines in development, one JSON
/// object per event in production.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(*env)));

    let output = match env {
        Environment::Development => fmt::layer().with_file(true).with_line_number(true).boxed(),
        Environment::Production => fmt::layer().json().flatten_event(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "tracing initialized");
}

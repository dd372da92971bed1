use axum::{middleware, routing::get};
use fd_api::{config::ApiConfig, jobs, metrics, router, state::ApiState, tracing::init_tracing};
use fd_store::InMemoryStore;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);
    let metrics_handle = metrics::init_metrics()?;

    // Sample decks stand in for a real card source
    let state = ApiState::in_memory(config.env, InMemoryStore::with_sample_decks());

    let background_jobs = jobs::start_background_jobs(
        state.sessions.clone(),
        config.session_idle_timeout(),
        config.session_sweep_interval(),
    );

    let metrics_router = axum::Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = router::app(state, &config)
        .merge(metrics_router)
        .layer(middleware::from_fn(metrics::track_metrics));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), environment = ?config.env, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    for job in background_jobs {
        job.abort();
    }
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

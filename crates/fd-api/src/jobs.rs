//! Background jobs for periodic maintenance tasks.
//!
//! Review sessions are held in memory only. A session the user walked away
//! from (closed the app mid-review, never left the summary screen) would
//! otherwise live forever, so idle sessions are swept on an interval.

use std::time::Duration;

use tokio::time::interval;

use crate::{metrics, review::SessionRegistry};

/// Start all background jobs
///
/// Returns a vector of join handles that can be aborted on shutdown
pub fn start_background_jobs(
    sessions: SessionRegistry,
    idle_timeout: Duration,
    sweep_interval: Duration,
) -> Vec<tokio::task::JoinHandle<()>> {
    vec![tokio::spawn(idle_session_sweep_job(
        sessions,
        idle_timeout,
        sweep_interval,
    ))]
}

/// Discard sessions idle for longer than `idle_timeout`, every `sweep_interval`
async fn idle_session_sweep_job(
    sessions: SessionRegistry,
    idle_timeout: Duration,
    sweep_interval: Duration,
) {
    let mut interval = interval(sweep_interval);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        sweep_idle_sessions(&sessions, idle_timeout).await;
    }
}

async fn sweep_idle_sessions(sessions: &SessionRegistry, idle_timeout: Duration) -> usize {
    let evicted = sessions.evict_idle(idle_timeout).await;

    if evicted > 0 {
        metrics::record_sessions_evicted(evicted);
        let remaining = sessions.len().await;
        tracing::info!(
            evicted,
            remaining,
            "Discarded idle review sessions"
        );
    } else {
        tracing::debug!("No idle review sessions to discard");
    }

    evicted
}

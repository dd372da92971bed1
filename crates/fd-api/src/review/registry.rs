//! In-flight review sessions.
//!
//! Every session sits behind its own mutex, so operations on one session are
//! serialized while sessions of other decks or users never wait on each
//! other. The map lock is only held long enough to clone a session handle.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use fd_review::ReviewSession;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Shared, individually locked access to one tracked session
pub type SessionHandle = Arc<Mutex<TrackedSession>>;

/// A review session plus the bookkeeping the API needs around it
#[derive(Debug)]
pub struct TrackedSession {
    pub session: ReviewSession,
    /// Whether the summary has been handed to the results sink
    pub summary_recorded: bool,
    last_activity: Instant,
}

impl TrackedSession {
    fn new(session: ReviewSession) -> Self {
        Self {
            session,
            summary_recorded: false,
            last_activity: Instant::now(),
        }
    }

    /// Mark the session as used right now
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Time since the session was last touched
    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }
}

/// Sessions in progress, keyed by session id. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its id along with a handle to it
    pub async fn insert(&self, session: ReviewSession) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(TrackedSession::new(session)));

        self.sessions.write().await.insert(id, Arc::clone(&handle));

        (id, handle)
    }

    /// Handle to a registered session, if any
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Discard a session. Returns false if it was not registered.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop every session idle for at least `max_idle`.
    ///
    /// Sessions locked by a request in progress are skipped. Returns the
    /// number of sessions removed.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(tracked) => tracked.idle_for() < max_idle,
            Err(_) => true,
        });

        before - sessions.len()
    }
}

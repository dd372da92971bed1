use std::{fmt, sync::Arc};

use fd_store::{CardSource, InMemoryStore, ResultsSink};

use crate::{config::Environment, review::SessionRegistry};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    /// Where decks and their cards come from
    pub cards: Arc<dyn CardSource>,
    /// Where summaries of completed sessions go
    pub results: Arc<dyn ResultsSink>,
    pub sessions: SessionRegistry,
    pub environment: Environment,
}

impl fmt::Debug for ApiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiState")
            .field("sessions", &self.sessions)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl ApiState {
    /// State over any card source and results sink, with no sessions yet
    pub fn new(
        environment: Environment,
        cards: Arc<dyn CardSource>,
        results: Arc<dyn ResultsSink>,
    ) -> Self {
        Self {
            cards,
            results,
            sessions: SessionRegistry::new(),
            environment,
        }
    }

    /// State backed by a single in-memory store for both cards and results
    pub fn in_memory(environment: Environment, store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(environment, store.clone(), store)
    }
}

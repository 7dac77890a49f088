//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything in it is read-only after startup: the content store reads
//! files on each request and the worker client is stateless, so handlers
//! never lock.

use std::sync::Arc;

use crate::config::Config;
use crate::services::content::ContentStore;
use crate::services::worker::WorkerApi;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<ContentStore>,
    pub worker: Arc<dyn WorkerApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, worker: Arc<dyn WorkerApi>) -> Self {
        let content = Arc::new(ContentStore::new(config.content_dir.clone()));
        Self { config: Arc::new(config), content, worker }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

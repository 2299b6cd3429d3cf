//! Shared application state for the read API.

use std::sync::Arc;

use puttvision_core::StatsStore;

/// State cloned into each request handler.
///
/// Holds the stats store shared with the producer pipeline; handlers only
/// ever take snapshots from it.
#[derive(Clone)]
pub struct AppState {
    stats: Arc<StatsStore>,
}

impl AppState {
    /// Wrap the shared stats store.
    pub fn new(stats: Arc<StatsStore>) -> Self {
        Self { stats }
    }

    /// Borrow the stats store.
    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }
}

use std::sync::Arc;

use packpal_extract::ListExtractor;
use packpal_store::{InMemoryTripStore, TripStore};

use crate::config::ServerConfig;

/// Shared handler state: the trip store, the chat extractor, and the base
/// URL for share links.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TripStore>,
    pub extractor: ListExtractor,
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn TripStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            extractor: ListExtractor::new(config.min_list_lines),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// State backed by a fresh in-memory store with default config.
    /// Useful for tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTripStore::new()), &ServerConfig::default())
    }
}

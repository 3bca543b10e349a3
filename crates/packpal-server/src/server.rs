use std::sync::Arc;

use tokio::net::TcpListener;

use packpal_store::{InMemoryTripStore, JsonFileTripStore, TripStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// PackPal HTTP server.
pub struct PackpalServer {
    config: ServerConfig,
}

impl PackpalServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the handler state, opening the configured store backend.
    pub fn build_state(&self) -> ServerResult<AppState> {
        let store: Arc<dyn TripStore> = match &self.config.data_file {
            Some(path) => Arc::new(JsonFileTripStore::open(path)?),
            None => Arc::new(InMemoryTripStore::new()),
        };
        Ok(AppState::new(store, &self.config))
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(self.build_state()?))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("PackPal server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

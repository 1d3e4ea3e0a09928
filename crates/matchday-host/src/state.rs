//! Shared host state.

use std::sync::Arc;

use matchday_core::repository::EventRepository;
use matchday_event_store::client::{ClientProvider, PgClientFactory};
use matchday_event_store::config::StorageConfig;
use matchday_event_store::pg_event_repository::PgEventRepository;

use crate::error::HostError;

/// State shared across all invocations in one process.
///
/// Holds the single repository instance; clone it freely, clones share the
/// same repository and storage client.
#[derive(Clone)]
pub struct HostState {
    /// The event repository every request is served from.
    pub event_repository: Arc<dyn EventRepository>,
}

impl HostState {
    /// Create host state around an existing repository.
    #[must_use]
    pub fn new(event_repository: Arc<dyn EventRepository>) -> Self {
        Self { event_repository }
    }

    /// Build host state from environment configuration.
    ///
    /// The PostgreSQL pool is not opened here; it is built on the first
    /// request that needs it and shared by all later requests.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Config` if the storage configuration is invalid.
    pub fn from_env() -> Result<Self, HostError> {
        let config = StorageConfig::from_env()?;
        Ok(Self::from_config(config))
    }

    /// Build host state for the given storage configuration.
    #[must_use]
    pub fn from_config(config: StorageConfig) -> Self {
        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout_secs = config.acquire_timeout.as_secs(),
            "Configuring event store"
        );
        let provider = Arc::new(ClientProvider::new(PgClientFactory::new(config)));
        Self::new(Arc::new(PgEventRepository::with_provider(provider)))
    }
}

impl std::fmt::Debug for HostState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostState").finish_non_exhaustive()
    }
}

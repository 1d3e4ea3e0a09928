//! Lazily constructed, process-wide storage client.
//!
//! A [`ClientProvider`] hands out one shared client handle. The handle is
//! built on the first [`ClientProvider::get`] call; callers that race that
//! first call wait for the single construction and then all observe the
//! same, fully built handle.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use matchday_core::error::DomainError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::config::StorageConfig;

/// Builds a storage client from fixed configuration.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// The handle type produced.
    type Client: Send + Sync + 'static;

    /// Constructs a new client.
    async fn connect(&self) -> Result<Self::Client, DomainError>;
}

/// Builds a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgClientFactory {
    config: StorageConfig,
}

impl PgClientFactory {
    /// Creates a factory for the given configuration.
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ClientFactory for PgClientFactory {
    type Client = PgPool;

    async fn connect(&self) -> Result<PgPool, DomainError> {
        PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .acquire_timeout(self.config.acquire_timeout)
            .connect(&self.config.database_url)
            .await
            .map_err(|e| DomainError::Storage(format!("failed to connect to PostgreSQL: {e}")))
    }
}

/// Memoizes a single client produced by a [`ClientFactory`].
pub struct ClientProvider<F: ClientFactory> {
    factory: Option<F>,
    client: OnceCell<Arc<F::Client>>,
}

impl<F: ClientFactory> ClientProvider<F> {
    /// Creates a provider that will build its client on first use.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory: Some(factory),
            client: OnceCell::new(),
        }
    }

    /// Creates a provider around an already constructed client.
    #[must_use]
    pub fn ready(client: F::Client) -> Self {
        Self {
            factory: None,
            client: OnceCell::new_with(Some(Arc::new(client))),
        }
    }

    /// Returns the shared client, constructing it if this is the first call.
    ///
    /// Concurrent first calls run the factory exactly once. A failed
    /// construction leaves the provider empty, so a later call tries again.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the factory fails.
    pub async fn get(&self) -> Result<Arc<F::Client>, DomainError> {
        let client = self
            .client
            .get_or_try_init(|| async move {
                let factory = self.factory.as_ref().ok_or_else(|| {
                    DomainError::Storage("storage client provider has no factory".to_owned())
                })?;
                info!("Constructing storage client");
                let client = factory.connect().await.inspect_err(|e| {
                    error!(error = %e, "Storage client construction failed");
                })?;
                info!("Storage client ready");
                Ok::<_, DomainError>(Arc::new(client))
            })
            .await?;
        Ok(Arc::clone(client))
    }

    /// Returns `true` once the client has been constructed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }
}

impl<F: ClientFactory> fmt::Debug for ClientProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientProvider")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

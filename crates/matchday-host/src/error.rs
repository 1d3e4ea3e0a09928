//! Matchday host — error types.

use matchday_core::error::DomainError;
use matchday_event_store::config::ConfigError;
use thiserror::Error;

/// Startup and per-request errors surfaced by the host.
#[derive(Debug, Error)]
pub enum HostError {
    /// Storage configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request failed validation, lookup, or storage.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl HostError {
    /// Machine-readable error code for the runtime's failure signal.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration_error",
            Self::Domain(DomainError::Validation(_)) => "validation_error",
            Self::Domain(DomainError::EventNotFound { .. }) => "event_not_found",
            Self::Domain(DomainError::Storage(_)) => "storage_error",
        }
    }

    /// Returns `true` if the caller, not the system, is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::Validation(_) | DomainError::EventNotFound { .. })
        )
    }
}

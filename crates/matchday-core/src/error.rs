//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Caller input was null, empty, a sentinel, or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A delete targeted a `(home_team, event_date)` pair with no record.
    #[error("event not found: no event for home team {home_team:?} on date {event_date}")]
    EventNotFound {
        /// The home team that was looked up.
        home_team: String,
        /// The event date that was looked up.
        event_date: i64,
    },

    /// The storage engine call failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Builds a `Validation` error from anything string-like.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

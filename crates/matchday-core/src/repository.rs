//! Event repository abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::event::Event;

/// Repository trait for storing and looking up sports events.
///
/// Implementations hold no copy of the data between calls; every operation
/// round-trips to the storage engine. Operations take no locks and may run
/// concurrently. Multi-statement operations (`find_by_team`, `delete`) are
/// not atomic.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Full scan of every stored event, in no particular order.
    async fn find_all(&self) -> Result<Vec<Event>, DomainError>;

    /// All events played in `city`, in the order the index yields them.
    async fn find_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError>;

    /// All events where `team` is the home or the away side, ascending by
    /// `event_date`.
    async fn find_by_team(&self, team: &str) -> Result<Vec<Event>, DomainError>;

    /// Point lookup on the primary key. Absence is `Ok(None)`.
    async fn find_by_team_and_date(
        &self,
        team: &str,
        event_date: i64,
    ) -> Result<Option<Event>, DomainError>;

    /// Inserts `event`, replacing any record with the same primary key.
    async fn save_or_update(&self, event: &Event) -> Result<(), DomainError>;

    /// Removes the event keyed by `(team, event_date)`.
    ///
    /// Returns `DomainError::EventNotFound` if no such event exists.
    async fn delete(&self, team: &str, event_date: i64) -> Result<(), DomainError>;
}

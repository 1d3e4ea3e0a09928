//! Test repositories — mock `EventRepository` implementations for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use matchday_core::error::DomainError;
use matchday_core::event::{Event, EventKey};
use matchday_core::merge::merge_by_event_date;
use matchday_core::repository::EventRepository;

fn not_found(team: &str, event_date: i64) -> DomainError {
    DomainError::EventNotFound {
        home_team: team.to_owned(),
        event_date,
    }
}

/// An event repository backed by an in-process map keyed on
/// `(home_team, event_date)`. Behaves like the PostgreSQL store, including
/// upsert-on-key and the home/away merge.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Mutex<BTreeMap<EventKey, Event>>,
}

impl InMemoryEventRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `events`. Later events replace
    /// earlier ones with the same key.
    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let map = events.into_iter().map(|e| (e.key(), e)).collect();
        Self {
            events: Mutex::new(map),
        }
    }

    /// Returns the number of stored events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns `true` if nothing is stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn filtered(&self, predicate: impl Fn(&Event) -> bool) -> Vec<Event> {
        self.events
            .lock()
            .unwrap()
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError> {
        Ok(self.filtered(|e| e.city == city))
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Event>, DomainError> {
        let home = self.filtered(|e| e.home_team == team);
        let away = self.filtered(|e| e.away_team == team);
        Ok(merge_by_event_date(home, away))
    }

    async fn find_by_team_and_date(
        &self,
        team: &str,
        event_date: i64,
    ) -> Result<Option<Event>, DomainError> {
        let key = EventKey {
            home_team: team.to_owned(),
            event_date,
        };
        Ok(self.events.lock().unwrap().get(&key).cloned())
    }

    async fn save_or_update(&self, event: &Event) -> Result<(), DomainError> {
        self.events
            .lock()
            .unwrap()
            .insert(event.key(), event.clone());
        Ok(())
    }

    async fn delete(&self, team: &str, event_date: i64) -> Result<(), DomainError> {
        let key = EventKey {
            home_team: team.to_owned(),
            event_date,
        };
        self.events
            .lock()
            .unwrap()
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| not_found(team, event_date))
    }
}

/// A repository call captured by [`RecordingEventRepository`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `find_all()`
    FindAll,
    /// `find_by_city(city)`
    FindByCity(String),
    /// `find_by_team(team)`
    FindByTeam(String),
    /// `find_by_team_and_date(team, date)`
    FindByTeamAndDate(String, i64),
    /// `save_or_update(event)`
    SaveOrUpdate(Event),
    /// `delete(team, date)`
    Delete(String, i64),
}

/// An event repository that records every call and its arguments. Every list
/// query returns the configured events unchanged, the point lookup and
/// delete match on the configured events' keys, and saves always succeed.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    events: Vec<Event>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingEventRepository {
    /// Create a recording repository that answers queries with `events`.
    #[must_use]
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup(&self, team: &str, event_date: i64) -> Option<Event> {
        self.events
            .iter()
            .find(|e| e.home_team == team && e.event_date == event_date)
            .cloned()
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        self.record(RecordedCall::FindAll);
        Ok(self.events.clone())
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError> {
        self.record(RecordedCall::FindByCity(city.to_owned()));
        Ok(self.events.clone())
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Event>, DomainError> {
        self.record(RecordedCall::FindByTeam(team.to_owned()));
        Ok(self.events.clone())
    }

    async fn find_by_team_and_date(
        &self,
        team: &str,
        event_date: i64,
    ) -> Result<Option<Event>, DomainError> {
        self.record(RecordedCall::FindByTeamAndDate(team.to_owned(), event_date));
        Ok(self.lookup(team, event_date))
    }

    async fn save_or_update(&self, event: &Event) -> Result<(), DomainError> {
        self.record(RecordedCall::SaveOrUpdate(event.clone()));
        Ok(())
    }

    async fn delete(&self, team: &str, event_date: i64) -> Result<(), DomainError> {
        self.record(RecordedCall::Delete(team.to_owned(), event_date));
        self.lookup(team, event_date)
            .map(|_| ())
            .ok_or_else(|| not_found(team, event_date))
    }
}

/// An event repository that always returns a storage error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventRepository;

impl FailingEventRepository {
    fn failure() -> DomainError {
        DomainError::Storage("connection refused".into())
    }
}

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        Err(Self::failure())
    }

    async fn find_by_city(&self, _city: &str) -> Result<Vec<Event>, DomainError> {
        Err(Self::failure())
    }

    async fn find_by_team(&self, _team: &str) -> Result<Vec<Event>, DomainError> {
        Err(Self::failure())
    }

    async fn find_by_team_and_date(
        &self,
        _team: &str,
        _event_date: i64,
    ) -> Result<Option<Event>, DomainError> {
        Err(Self::failure())
    }

    async fn save_or_update(&self, _event: &Event) -> Result<(), DomainError> {
        Err(Self::failure())
    }

    async fn delete(&self, _team: &str, _event_date: i64) -> Result<(), DomainError> {
        Err(Self::failure())
    }
}

//! Shared test helpers for host integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use matchday_core::event::Event;
use matchday_event_store::pg_event_repository::PgEventRepository;
use matchday_host::dispatch::dispatch;
use matchday_host::request::{EventRequest, EventResponse};
use matchday_host::state::HostState;
use matchday_test_support::InMemoryEventRepository;
use sqlx::PgPool;

/// Build host state over a fresh in-memory repository.
pub fn in_memory_state() -> HostState {
    HostState::new(Arc::new(InMemoryEventRepository::new()))
}

/// Build host state over a real `PgEventRepository`.
pub fn pg_state(pool: PgPool) -> HostState {
    HostState::new(Arc::new(PgEventRepository::new(pool)))
}

/// Save `event` through the host and assert it succeeded.
pub async fn save(state: &HostState, event: Event) {
    let response = dispatch(state, EventRequest::SaveOrUpdate { event: Some(event) })
        .await
        .unwrap();
    assert_eq!(response, EventResponse::Done);
}

/// Dispatch a list request and unwrap the events.
pub async fn list(state: &HostState, request: EventRequest) -> Vec<Event> {
    match dispatch(state, request).await.unwrap() {
        EventResponse::Events(events) => events,
        other => panic!("expected Events, got {other:?}"),
    }
}

/// Dispatch a point lookup and unwrap the result.
pub async fn lookup(state: &HostState, team_name: &str, event_date: i64) -> Option<Event> {
    let request = EventRequest::GetByTeamAndDate {
        team_name: Some(team_name.to_owned()),
        event_date,
    };
    match dispatch(state, request).await.unwrap() {
        EventResponse::Event(event) => event,
        other => panic!("expected Event, got {other:?}"),
    }
}

/// Returns the event dates, in order.
pub fn dates(events: &[Event]) -> Vec<i64> {
    events.iter().map(|e| e.event_date).collect()
}

//! Shared test mocks and utilities for the Matchday event store.

mod fixtures;
mod repository;

pub use fixtures::{event, event_with_details};
pub use repository::{
    FailingEventRepository, InMemoryEventRepository, RecordedCall, RecordingEventRepository,
};

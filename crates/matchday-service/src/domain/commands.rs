//! Write commands accepted by the event service.

use matchday_core::command::Command;
use matchday_core::event::Event;
use uuid::Uuid;

/// Command to insert or replace an event.
///
/// `event` is `None` when the caller supplied no record at all.
#[derive(Debug, Clone)]
pub struct SaveOrUpdateEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The record to store.
    pub event: Option<Event>,
}

impl Command for SaveOrUpdateEvent {
    fn command_type(&self) -> &'static str {
        "events.save_or_update"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to delete an event. Only the record's key fields are used.
#[derive(Debug, Clone)]
pub struct DeleteEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The record identifying what to delete.
    pub event: Option<Event>,
}

impl Command for DeleteEvent {
    fn command_type(&self) -> &'static str {
        "events.delete"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

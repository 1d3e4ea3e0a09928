//! Command handlers for the event service.
//!
//! This module contains application-level command handler functions that
//! validate a command's record and forward it to the repository.

use matchday_core::command::Command;
use matchday_core::error::DomainError;
use matchday_core::repository::EventRepository;
use tracing::{error, info};

use crate::domain::commands::{DeleteEvent, SaveOrUpdateEvent};
use crate::domain::validation::validate_event;

/// Handles the `SaveOrUpdateEvent` command: validates the record and upserts
/// it on `(home_team, event_date)`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command carries no event or the
/// event is incomplete. Returns `DomainError::Storage` if the upsert fails.
pub async fn handle_save_or_update_event(
    command: &SaveOrUpdateEvent,
    repo: &dyn EventRepository,
) -> Result<(), DomainError> {
    let Some(event) = command.event.as_ref() else {
        error!(
            correlation_id = %command.correlation_id(),
            "SaveEvent received null input"
        );
        return Err(DomainError::validation("cannot save null event"));
    };
    validate_event(event)?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        home_team = %event.home_team,
        event_date = event.event_date,
        "Saving or updating event"
    );
    repo.save_or_update(event).await?;

    info!(correlation_id = %command.correlation_id(), "Successfully saved/updated event");
    Ok(())
}

/// Handles the `DeleteEvent` command: deletes the event keyed by the
/// record's `(home_team, event_date)`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the command carries no event or the
/// home team is empty. Returns `DomainError::EventNotFound` if no such event
/// exists. Returns `DomainError::Storage` if the delete fails.
pub async fn handle_delete_event(
    command: &DeleteEvent,
    repo: &dyn EventRepository,
) -> Result<(), DomainError> {
    let Some(event) = command.event.as_ref() else {
        error!(
            correlation_id = %command.correlation_id(),
            "DeleteEvent received null input"
        );
        return Err(DomainError::validation("cannot delete null event"));
    };
    if event.home_team.trim().is_empty() {
        return Err(DomainError::validation("home team cannot be empty"));
    }

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        home_team = %event.home_team,
        event_date = event.event_date,
        "Deleting event"
    );
    repo.delete(&event.home_team, event.event_date).await?;

    info!(correlation_id = %command.correlation_id(), "Successfully deleted event");
    Ok(())
}

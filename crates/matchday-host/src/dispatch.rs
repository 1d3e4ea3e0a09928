//! Routes requests to the event service handlers.

use matchday_service::application::command_handlers::{
    handle_delete_event, handle_save_or_update_event,
};
use matchday_service::application::query_handlers::{
    get_all_events, get_event_for_team_and_date, get_events_for_city, get_events_for_team,
};
use matchday_service::domain::commands::{DeleteEvent, SaveOrUpdateEvent};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::error::HostError;
use crate::request::{EventRequest, EventResponse};
use crate::state::HostState;

/// Serves one request against the shared repository.
///
/// Every failure is returned to the caller; nothing is retried here.
///
/// # Errors
///
/// Returns `HostError::Domain` carrying the validation, not-found, or
/// storage error raised while serving the request.
pub async fn dispatch(state: &HostState, request: EventRequest) -> Result<EventResponse, HostError> {
    let correlation_id = Uuid::new_v4();
    let span = info_span!("dispatch", action = request.action(), %correlation_id);

    async move {
        let repo = &*state.event_repository;
        let response = match request {
            EventRequest::GetAll => EventResponse::Events(get_all_events(repo).await?),
            EventRequest::GetByTeam { team_name } => {
                EventResponse::Events(get_events_for_team(team_name.as_deref(), repo).await?)
            }
            EventRequest::GetByCity { city_name } => {
                EventResponse::Events(get_events_for_city(city_name.as_deref(), repo).await?)
            }
            EventRequest::GetByTeamAndDate {
                team_name,
                event_date,
            } => EventResponse::Event(
                get_event_for_team_and_date(team_name.as_deref(), event_date, repo).await?,
            ),
            EventRequest::SaveOrUpdate { event } => {
                let command = SaveOrUpdateEvent {
                    correlation_id,
                    event,
                };
                handle_save_or_update_event(&command, repo).await?;
                EventResponse::Done
            }
            EventRequest::Delete { event } => {
                let command = DeleteEvent {
                    correlation_id,
                    event,
                };
                handle_delete_event(&command, repo).await?;
                EventResponse::Done
            }
        };
        Ok::<_, HostError>(response)
    }
    .instrument(span)
    .await
    .inspect_err(|e: &HostError| warn!(error_code = e.error_code(), error = %e, "Request failed"))
}

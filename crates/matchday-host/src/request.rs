//! Requests the host accepts and the responses it returns.

use matchday_core::event::Event;
use serde::{Deserialize, Serialize};

/// One invocation delivered by the runtime.
///
/// Optional fields model values the caller may have left out entirely;
/// the service rejects those with a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EventRequest {
    /// List every event.
    GetAll,
    /// List a team's home and away events.
    GetByTeam {
        /// Possibly percent-encoded team name.
        team_name: Option<String>,
    },
    /// List the events played in a city.
    GetByCity {
        /// Possibly percent-encoded city name.
        city_name: Option<String>,
    },
    /// Look up the event a team hosts on a date.
    GetByTeamAndDate {
        /// Possibly percent-encoded team name.
        team_name: Option<String>,
        /// Event timestamp in epoch milliseconds.
        event_date: i64,
    },
    /// Insert or replace an event.
    SaveOrUpdate {
        /// The record to store.
        event: Option<Event>,
    },
    /// Delete the event with the record's key.
    Delete {
        /// The record identifying what to delete.
        event: Option<Event>,
    },
}

impl EventRequest {
    /// Short name of the request kind, for logs.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetByTeam { .. } => "get_by_team",
            Self::GetByCity { .. } => "get_by_city",
            Self::GetByTeamAndDate { .. } => "get_by_team_and_date",
            Self::SaveOrUpdate { .. } => "save_or_update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Successful outcome of a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", content = "data", rename_all = "snake_case")]
pub enum EventResponse {
    /// A sequence of events.
    Events(Vec<Event>),
    /// A point lookup result.
    Event(Option<Event>),
    /// A write completed.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_action_tag() {
        let request: EventRequest = serde_json::from_value(serde_json::json!({
            "action": "get_by_team",
            "team_name": "Real%20Madrid"
        }))
        .unwrap();

        assert_eq!(
            request,
            EventRequest::GetByTeam {
                team_name: Some("Real%20Madrid".to_owned())
            }
        );
        assert_eq!(request.action(), "get_by_team");
    }

    #[test]
    fn test_null_event_parses_as_none() {
        let request: EventRequest = serde_json::from_value(serde_json::json!({
            "action": "save_or_update",
            "event": null
        }))
        .unwrap();

        assert_eq!(request, EventRequest::SaveOrUpdate { event: None });
    }
}

//! The sports-event record and its composite key.

use serde::{Deserialize, Serialize};

/// A scheduled or played fixture between two teams.
///
/// Identified by `(home_team, event_date)`. `away_team` and `city` are
/// indexed for lookups; `details` is opaque payload (score, venue, ...)
/// that the store persists without interpreting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Home team name. Partition half of the primary key.
    pub home_team: String,
    /// Event timestamp in epoch milliseconds. Sort half of the primary key.
    pub event_date: i64,
    /// Visiting team name.
    pub away_team: String,
    /// City the event takes place in.
    pub city: String,
    /// Descriptive attributes that are not part of any key.
    #[serde(default = "empty_details")]
    pub details: serde_json::Value,
}

fn empty_details() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Event {
    /// Creates an event with empty `details`.
    pub fn new(
        home_team: impl Into<String>,
        event_date: i64,
        away_team: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            event_date,
            away_team: away_team.into(),
            city: city.into(),
            details: empty_details(),
        }
    }

    /// Replaces the opaque payload.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Returns the primary key of this event.
    #[must_use]
    pub fn key(&self) -> EventKey {
        EventKey {
            home_team: self.home_team.clone(),
            event_date: self.event_date,
        }
    }

    /// Returns `true` if `team` plays in this event, home or away.
    #[must_use]
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// Primary key of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventKey {
    /// Home team name.
    pub home_team: String,
    /// Event timestamp in epoch milliseconds.
    pub event_date: i64,
}

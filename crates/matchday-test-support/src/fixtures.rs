//! Event builders for tests.

use matchday_core::event::Event;

/// Builds an event with empty details.
#[must_use]
pub fn event(home_team: &str, away_team: &str, city: &str, event_date: i64) -> Event {
    Event::new(home_team, event_date, away_team, city)
}

/// Builds an event carrying the given opaque payload.
#[must_use]
pub fn event_with_details(
    home_team: &str,
    away_team: &str,
    city: &str,
    event_date: i64,
    details: serde_json::Value,
) -> Event {
    event(home_team, away_team, city, event_date).with_details(details)
}

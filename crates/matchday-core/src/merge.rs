//! Merging of the home-team and away-team lookup results.
//!
//! A team's schedule is drawn from two sources that are each unordered with
//! respect to the other: the home-team partition and the away-team index.
//! [`merge_by_event_date`] combines them into one chronological sequence.

use std::collections::HashSet;

use crate::event::{Event, EventKey};

/// Concatenates `home` and `away`, drops repeated primary keys, and sorts the
/// result ascending by `event_date`.
///
/// Ties on `event_date` are broken by `home_team`. After deduplication the
/// pair `(event_date, home_team)` is unique, so the ordering is total and the
/// output does not depend on the order of either input.
///
/// An event whose home and away team are the same would be returned by both
/// lookups; only its first occurrence is kept.
#[must_use]
pub fn merge_by_event_date(home: Vec<Event>, away: Vec<Event>) -> Vec<Event> {
    let mut seen: HashSet<EventKey> = HashSet::with_capacity(home.len() + away.len());
    let mut merged: Vec<Event> = home
        .into_iter()
        .chain(away)
        .filter(|event| seen.insert(event.key()))
        .collect();

    merged.sort_by(|a, b| {
        a.event_date
            .cmp(&b.event_date)
            .then_with(|| a.home_team.cmp(&b.home_team))
    });
    merged
}

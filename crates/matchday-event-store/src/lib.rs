//! Matchday event store — PostgreSQL persistence for sports events.
//!
//! Events live in one table keyed by `(home_team, event_date)` with
//! secondary indexes on `city` and `away_team`. The connection pool is built
//! lazily, once, by a [`client::ClientProvider`].

pub mod client;
pub mod config;
pub mod pg_event_repository;

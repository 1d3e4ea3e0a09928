//! Matchday — event service.
//!
//! Validates and normalizes identifiers and records arriving from the
//! invocation boundary, then delegates to an `EventRepository`. Performs no
//! retries and does not reorder what the repository returns.

pub mod application;
pub mod domain;

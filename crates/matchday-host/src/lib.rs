//! Matchday host — the process-side wiring around the event service.
//!
//! An external runtime calls [`state::HostState::from_env`] once at process
//! startup, then hands each incoming request to [`dispatch::dispatch`].
//! Request framing and transport stay with the runtime.

pub mod dispatch;
pub mod error;
pub mod request;
pub mod state;
pub mod telemetry;

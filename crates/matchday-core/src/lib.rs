//! Matchday Core — shared domain model and storage contracts.
//!
//! This crate defines the `Event` record, the error taxonomy, and the
//! repository trait that storage backends implement. It contains no
//! infrastructure code.

pub mod command;
pub mod error;
pub mod event;
pub mod merge;
pub mod repository;

//! Commands and input validation rules.

pub mod commands;
pub mod validation;

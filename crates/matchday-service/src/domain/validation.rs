//! Validation and normalization of caller input.
//!
//! Identifiers may arrive form-urlencoded (`+` for space, `%XX` escapes).
//! They are decoded here, before they reach the repository, and malformed
//! escapes are rejected rather than passed through.

use matchday_core::error::DomainError;
use matchday_core::event::Event;
use percent_encoding::percent_decode_str;

/// Placeholder some callers send in place of a missing identifier.
pub const UNDEFINED: &str = "undefined";

/// Which identifier is being validated; used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// A team name.
    Team,
    /// A city name.
    City,
}

impl IdentifierKind {
    fn label(self) -> &'static str {
        match self {
            Self::Team => "team name",
            Self::City => "city name",
        }
    }

    fn missing(self) -> DomainError {
        DomainError::Validation(format!("{} cannot be null or empty", self.label()))
    }
}

/// Rejects missing, empty, or sentinel identifiers and returns the decoded
/// value.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `raw` is `None`, empty, `"undefined"`,
/// malformed, or decodes to a blank string.
pub fn normalize_identifier(raw: Option<&str>, kind: IdentifierKind) -> Result<String, DomainError> {
    let raw = match raw {
        Some(value) if !value.is_empty() && value != UNDEFINED => value,
        _ => return Err(kind.missing()),
    };

    let decoded = decode_identifier(raw).map_err(|reason| {
        DomainError::Validation(format!("{} {raw:?} is not validly encoded: {reason}", kind.label()))
    })?;

    if decoded.trim().is_empty() || decoded == UNDEFINED {
        return Err(kind.missing());
    }
    Ok(decoded)
}

/// Decodes a form-urlencoded identifier.
///
/// # Errors
///
/// Returns a description of the problem if a `%` is not followed by two hex
/// digits or the decoded bytes are not UTF-8.
pub fn decode_identifier(raw: &str) -> Result<String, String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(format!("incomplete escape sequence at byte {i}"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| format!("decoded bytes are not UTF-8: {e}"))
}

/// Checks that a record is fit to be stored.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a key or indexed field is empty, or
/// the home and away teams are the same.
pub fn validate_event(event: &Event) -> Result<(), DomainError> {
    if event.home_team.trim().is_empty() {
        return Err(DomainError::validation("home team cannot be empty"));
    }
    if event.away_team.trim().is_empty() {
        return Err(DomainError::validation("away team cannot be empty"));
    }
    if event.city.trim().is_empty() {
        return Err(DomainError::validation("city cannot be empty"));
    }
    if event.home_team == event.away_team {
        return Err(DomainError::Validation(format!(
            "team {:?} cannot be both home and away team",
            event.home_team
        )));
    }
    Ok(())
}

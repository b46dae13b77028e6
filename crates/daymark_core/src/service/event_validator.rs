//! Pure validation of candidate event input.
//!
//! # Responsibility
//! - Turn raw form values (text, hour, minute) into a committed-ready shape.
//!
//! # Invariants
//! - Validation has no side effects.
//! - Text blankness is checked before time parsing.

use crate::model::date::EventTime;
use crate::model::event::{normalize_event_text, EventValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

// Leading integer prefix: optional whitespace and sign, then digits. Trailing
// characters are ignored, so "09h" reads as 9.
static LEADING_INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvent {
    pub time: EventTime,
    /// Trimmed and length-clamped text.
    pub text: String,
}

/// Validates draft text plus raw hour and minute strings.
///
/// # Errors
/// - `EmptyText` when `text` is blank after trimming.
/// - `InvalidTime` when either field has no leading integer, or the values
///   fall outside hour 0-23 / minute 0-59.
pub fn validate_event_input(
    text: &str,
    hour_raw: &str,
    minute_raw: &str,
) -> Result<ValidatedEvent, EventValidationError> {
    let text = normalize_event_text(text)?;
    let invalid_time = || EventValidationError::InvalidTime {
        hour: hour_raw.to_string(),
        minute: minute_raw.to_string(),
    };

    let hour = parse_leading_integer(hour_raw).ok_or_else(invalid_time)?;
    let minute = parse_leading_integer(minute_raw).ok_or_else(invalid_time)?;
    let time = u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .and_then(|(hour, minute)| EventTime::new(hour, minute))
        .ok_or_else(invalid_time)?;

    Ok(ValidatedEvent { time, text })
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let captures = LEADING_INTEGER_RE.captures(raw)?;
    captures.get(1)?.as_str().parse().ok()
}

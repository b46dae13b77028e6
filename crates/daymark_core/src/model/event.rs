//! Event domain model.
//!
//! # Responsibility
//! - Define the timestamped text entry attached to a calendar day.
//! - Own the text normalization rule shared by validation and storage.
//!
//! # Invariants
//! - `id` is stable and never reused for another event; edits keep it.
//! - `text` is trimmed and holds 1..=`MAX_EVENT_TEXT_CHARS` characters.

use crate::model::date::{CalendarDate, EventTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum event text length, counted in characters after trimming.
pub const MAX_EVENT_TEXT_CHARS: usize = 60;

/// Stable identifier assigned to an event at creation.
pub type EventId = Uuid;

/// Validation failures for candidate event input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Text is blank after trimming.
    EmptyText,
    /// Hour or minute is unparseable or out of range. Raw input is kept for
    /// diagnostics.
    InvalidTime { hour: String, minute: String },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "event text must not be blank"),
            Self::InvalidTime { hour, minute } => write!(
                f,
                "invalid time `{hour}:{minute}`; expected hour 0-23 and minute 0-59"
            ),
        }
    }
}

impl Error for EventValidationError {}

/// A committed calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventFields")]
pub struct Event {
    pub id: EventId,
    pub date: CalendarDate,
    pub time: EventTime,
    pub text: String,
}

#[derive(Deserialize)]
struct EventFields {
    id: EventId,
    date: CalendarDate,
    time: EventTime,
    text: String,
}

impl TryFrom<EventFields> for Event {
    type Error = EventValidationError;

    fn try_from(value: EventFields) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.date, value.time, value.text.as_str())
    }
}

impl Event {
    /// Creates an event with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank after trimming.
    pub fn new(
        date: CalendarDate,
        time: EventTime,
        text: &str,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), date, time, text)
    }

    /// Creates an event with a caller-provided id.
    ///
    /// Used by the edit path, where identity must survive the replacement.
    pub fn with_id(
        id: EventId,
        date: CalendarDate,
        time: EventTime,
        text: &str,
    ) -> Result<Self, EventValidationError> {
        Ok(Self {
            id,
            date,
            time,
            text: normalize_event_text(text)?,
        })
    }

    /// Returns whether this event matches (date, time, text) exactly, ignoring id.
    pub fn same_entry(&self, date: CalendarDate, time: EventTime, text: &str) -> bool {
        self.date == date && self.time == time && self.text == text
    }
}

/// Trims `text` and clamps it to `MAX_EVENT_TEXT_CHARS` characters.
///
/// Clamping may expose trailing whitespace, so the result is trimmed again.
///
/// # Errors
/// - `EmptyText` when nothing remains after trimming.
pub fn normalize_event_text(text: &str) -> Result<String, EventValidationError> {
    let clamped = clamp_chars(text.trim(), MAX_EVENT_TEXT_CHARS);
    let normalized = clamped.trim_end();
    if normalized.is_empty() {
        return Err(EventValidationError::EmptyText);
    }
    Ok(normalized.to_string())
}

/// Returns the longest prefix of `text` holding at most `max_chars` characters.
pub fn clamp_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_chars, normalize_event_text, EventValidationError, MAX_EVENT_TEXT_CHARS};

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_event_text("  Demo \n").unwrap(), "Demo");
        assert_eq!(
            normalize_event_text(" \t ").unwrap_err(),
            EventValidationError::EmptyText
        );
    }

    #[test]
    fn normalize_clamps_long_text_on_char_boundaries() {
        let long = "ngày".repeat(20);
        let normalized = normalize_event_text(&long).unwrap();
        assert_eq!(normalized.chars().count(), MAX_EVENT_TEXT_CHARS);
    }

    #[test]
    fn clamp_chars_keeps_short_text_intact() {
        assert_eq!(clamp_chars("abc", 5), "abc");
        assert_eq!(clamp_chars("abcdef", 3), "abc");
    }
}

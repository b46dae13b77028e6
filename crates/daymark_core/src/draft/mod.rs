//! Uncommitted event drafts.
//!
//! # Responsibility
//! - Hold the in-progress text, time and target date of an add or edit form.
//! - Expose the derived form state (char count, submit enablement, last error).
//!
//! # Invariants
//! - A draft never touches the event store; only submission commits it.
//! - Draft text never exceeds the configured character limit.

pub mod time_editor;

use crate::model::date::CalendarDate;
use crate::model::event::{clamp_chars, Event, EventId};
use crate::service::calendar_service::SessionError;
use self::time_editor::TimeOfDayEditor;

/// Whether submission creates a new event or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Add,
    Edit(EventId),
}

/// In-progress event form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    mode: DraftMode,
    date: CalendarDate,
    text: String,
    time: TimeOfDayEditor,
    max_text_chars: usize,
    error: Option<SessionError>,
}

impl Draft {
    /// Blank add draft for `date`, pre-filled with `time`.
    pub fn for_add(date: CalendarDate, time: TimeOfDayEditor, max_text_chars: usize) -> Self {
        Self {
            mode: DraftMode::Add,
            date,
            text: String::new(),
            time,
            max_text_chars,
            error: None,
        }
    }

    /// Edit draft initialized from a stored event.
    pub fn for_edit(event: &Event, max_text_chars: usize) -> Self {
        Self {
            mode: DraftMode::Edit(event.id),
            date: event.date,
            text: clamp_chars(event.text.as_str(), max_text_chars).to_string(),
            time: TimeOfDayEditor::new(event.time),
            max_text_chars,
            error: None,
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn time_editor(&self) -> &TimeOfDayEditor {
        &self.time
    }

    pub fn time_editor_mut(&mut self) -> &mut TimeOfDayEditor {
        &mut self.time
    }

    /// Error recorded by the last failed submission, if any.
    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Replaces the text, refusing input past the character limit.
    ///
    /// Any error from an earlier submit is cleared.
    pub fn set_text(&mut self, text: &str) {
        self.text = clamp_chars(text, self.max_text_chars).to_string();
        self.clear_error();
    }

    pub(crate) fn record_error(&mut self, error: SessionError) {
        self.error = Some(error);
    }

    /// Drops the recorded submit error once the form has been edited.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn remaining_chars(&self) -> usize {
        self.max_text_chars.saturating_sub(self.char_count())
    }

    pub fn max_text_chars(&self) -> usize {
        self.max_text_chars
    }

    /// Submit stays disabled while the text is blank.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, DraftMode::Edit(_))
    }
}

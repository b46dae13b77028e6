//! Calendar session use-case service.
//!
//! # Responsibility
//! - Turn discrete user intents (day clicks, month arrows, draft edits,
//!   submit/cancel/delete) into navigator, draft and store operations.
//! - Expose current state for the presentation layer to re-fetch after each
//!   intent.
//!
//! # Invariants
//! - At most one draft is open; opening another replaces it.
//! - Past-date clicks change nothing.
//! - A failed submit leaves the store untouched and keeps the draft open with
//!   the error recorded.

use crate::calendar::navigator::{CalendarNavigator, GridCell};
use crate::config::CalendarConfig;
use crate::draft::time_editor::TimeOfDayEditor;
use crate::draft::{Draft, DraftMode};
use crate::model::date::{CalendarCursor, CalendarDate, DateError, Direction, EventTime};
use crate::model::event::{Event, EventId, EventValidationError};
use crate::repo::event_repo::{EventRepository, InMemoryEventRepository, RepoError};
use crate::service::event_validator::validate_event_input;
use crate::service::selection_guard::is_eligible;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing error of a session intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Draft intent issued while no draft is open.
    NoOpenDraft,
    /// Clicked day does not exist in the displayed month.
    Date(DateError),
    Validation(EventValidationError),
    DuplicateEvent { existing: EventId },
    NotFound(EventId),
}

impl SessionError {
    /// Stable snake_case code for UI message lookup.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoOpenDraft => "no_open_draft",
            Self::Date(_) => "invalid_date",
            Self::Validation(EventValidationError::EmptyText) => "empty_text",
            Self::Validation(EventValidationError::InvalidTime { .. }) => "invalid_time",
            Self::DuplicateEvent { .. } => "duplicate_event",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenDraft => write!(f, "no event draft is open"),
            Self::Date(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateEvent { .. } => write!(f, "this event already exists"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DuplicateEvent { existing, .. } => Self::DuplicateEvent { existing },
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<EventValidationError> for SessionError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DateError> for SessionError {
    fn from(value: DateError) -> Self {
        Self::Date(value)
    }
}

/// One user's calendar state: displayed month, events and open draft.
pub struct CalendarSession<R: EventRepository> {
    config: CalendarConfig,
    navigator: CalendarNavigator,
    repo: R,
    draft: Option<Draft>,
}

impl CalendarSession<InMemoryEventRepository> {
    /// Session backed by an empty memory-resident store.
    pub fn in_memory(config: CalendarConfig) -> Self {
        Self::new(config, InMemoryEventRepository::new())
    }
}

impl<R: EventRepository> CalendarSession<R> {
    /// Creates a session showing the month of `config.today`.
    pub fn new(config: CalendarConfig, repo: R) -> Self {
        let navigator = CalendarNavigator::starting_at(config.today, config.week_start);
        info!(
            "event=session_start module=service status=ok today={} week_start={}",
            config.today,
            config.week_start.as_str()
        );
        Self {
            config,
            navigator,
            repo,
            draft: None,
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn today(&self) -> CalendarDate {
        self.config.today
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.navigator.cursor()
    }

    /// Fresh day grid for the displayed month.
    pub fn grid(&self) -> Result<Vec<GridCell>, DateError> {
        self.navigator.grid(self.config.today)
    }

    /// Events sorted by date.
    pub fn events(&self) -> Vec<Event> {
        self.repo.list_events()
    }

    pub fn event_count(&self) -> usize {
        self.repo.event_count()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn click_prev_month(&mut self) -> CalendarCursor {
        self.navigator.advance(Direction::Backward)
    }

    pub fn click_next_month(&mut self) -> CalendarCursor {
        self.navigator.advance(Direction::Forward)
    }

    /// Opens an add draft for `day` of the displayed month.
    ///
    /// Returns `Ok(false)` when the day is in the past and nothing changed.
    ///
    /// # Errors
    /// - `SessionError::Date` when `day` does not exist in the month.
    pub fn click_day(&mut self, day: u32) -> Result<bool, SessionError> {
        let date = self.navigator.cursor().date_of(day)?;
        Ok(self.open_add_draft(date))
    }

    /// Opens a blank add draft for `date` when it is eligible.
    pub fn open_add_draft(&mut self, date: CalendarDate) -> bool {
        if !is_eligible(date, self.config.today) {
            debug!("event=draft_open module=service status=ignored reason=past_date date={date}");
            return false;
        }

        self.draft = Some(Draft::for_add(
            date,
            TimeOfDayEditor::new(self.config.default_time),
            self.config.max_text_chars,
        ));
        debug!("event=draft_open module=service status=ok mode=add date={date}");
        true
    }

    /// Opens an edit draft pre-filled from the stored event.
    pub fn open_edit_draft(&mut self, id: EventId) -> Result<(), SessionError> {
        let event = self.repo.get_event(id).ok_or(SessionError::NotFound(id))?;
        self.draft = Some(Draft::for_edit(&event, self.config.max_text_chars));
        debug!("event=draft_open module=service status=ok mode=edit id={id}");
        Ok(())
    }

    pub fn change_draft_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.open_draft_mut()?.set_text(text);
        Ok(())
    }

    /// Cycles the draft hour one step and returns the new time.
    pub fn change_draft_hour(&mut self, direction: Direction) -> Result<EventTime, SessionError> {
        let draft = self.open_draft_mut()?;
        draft.clear_error();
        let editor = draft.time_editor_mut();
        editor.step_hour(direction);
        Ok(editor.time())
    }

    /// Cycles the draft minute one step and returns the new time.
    pub fn change_draft_minute(
        &mut self,
        direction: Direction,
    ) -> Result<EventTime, SessionError> {
        let draft = self.open_draft_mut()?;
        draft.clear_error();
        let editor = draft.time_editor_mut();
        editor.step_minute(direction);
        Ok(editor.time())
    }

    /// Validates and commits the open draft.
    ///
    /// On success the draft closes and the committed event is returned. On
    /// failure the draft stays open with the error recorded.
    pub fn submit_draft(&mut self) -> Result<Event, SessionError> {
        let draft = self.draft.as_mut().ok_or(SessionError::NoOpenDraft)?;
        let editor = draft.time_editor();
        let result = validate_event_input(
            draft.text(),
            editor.hour_field().as_str(),
            editor.minute_field().as_str(),
        )
        .map_err(SessionError::from)
        .and_then(|validated| {
            let committed = match draft.mode() {
                DraftMode::Add => {
                    self.repo
                        .add_event(draft.date(), validated.time, validated.text.as_str())
                }
                DraftMode::Edit(id) => self.repo.edit_event(
                    id,
                    draft.date(),
                    validated.time,
                    validated.text.as_str(),
                ),
            };
            committed.map_err(SessionError::from)
        });

        match result {
            Ok(event) => {
                info!(
                    "event=draft_submit module=service status=ok id={} date={}",
                    event.id, event.date
                );
                self.draft = None;
                Ok(event)
            }
            Err(err) => {
                warn!(
                    "event=draft_submit module=service status=rejected kind={}",
                    err.kind()
                );
                draft.record_error(err.clone());
                Err(err)
            }
        }
    }

    /// Discards the open draft. Returns whether one was open.
    pub fn cancel_draft(&mut self) -> bool {
        let had_draft = self.draft.take().is_some();
        if had_draft {
            debug!("event=draft_cancel module=service status=ok");
        }
        had_draft
    }

    /// Deletes an event; absent ids are a no-op.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        self.repo.delete_event(id)
    }

    fn open_draft_mut(&mut self) -> Result<&mut Draft, SessionError> {
        self.draft.as_mut().ok_or(SessionError::NoOpenDraft)
    }
}

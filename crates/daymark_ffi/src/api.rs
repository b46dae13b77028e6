//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose calendar user intents as sync, use-case-level functions via FRB.
//! - Flatten core state into plain view structs the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One calendar session exists per process; `calendar_init` replaces it.
//! - Dates cross the boundary as `YYYY-MM-DD`, ids as UUID strings.
//!
//! # See also
//! - daymark_core::service::calendar_service

use daymark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CalendarConfig, CalendarDate, CalendarSession, Direction, DraftMode, Event, EventId,
    GridCell, InMemoryEventRepository, SessionError,
};
use log::warn;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

type Session = CalendarSession<InMemoryEventRepository>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic action response envelope for calendar intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarActionResponse {
    /// Whether the intent took effect.
    pub ok: bool,
    /// Event touched by the intent, when there is one.
    pub event_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Stable error code (`empty_text`, `invalid_time`, `duplicate_event`,
    /// `not_found`, `no_open_draft`, `invalid_date`, `invalid_id`,
    /// `invalid_config`) when `ok` is false because of an error.
    pub error_kind: Option<String>,
}

impl CalendarActionResponse {
    fn success(message: impl Into<String>, event_id: Option<EventId>) -> Self {
        Self {
            ok: true,
            event_id: event_id.map(|id| id.to_string()),
            message: message.into(),
            error_kind: None,
        }
    }

    /// Intent accepted but nothing changed (e.g. past-date click).
    fn ignored(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            event_id: None,
            message: message.into(),
            error_kind: None,
        }
    }

    fn failure(kind: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            event_id: None,
            message: message.into(),
            error_kind: Some(kind.to_string()),
        }
    }

    fn from_session_error(action: &str, err: &SessionError) -> Self {
        Self::failure(err.kind(), format!("{action} failed: {err}"))
    }
}

/// One slot of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCellView {
    /// `None` for leading padding cells.
    pub day: Option<u32>,
    pub is_today: bool,
}

/// Displayed month with its padded day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    pub cells: Vec<DayCellView>,
    pub rows: u32,
    pub today: String,
}

/// One committed event for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub event_id: String,
    pub date: String,
    /// Zero-padded `HH:MM`.
    pub time: String,
    pub text: String,
}

/// Open draft form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    /// `add` or `edit`.
    pub mode: String,
    pub event_id: Option<String>,
    pub date: String,
    pub text: String,
    pub hour: String,
    pub minute: String,
    pub char_count: u32,
    pub max_chars: u32,
    pub can_submit: bool,
    pub error_kind: Option<String>,
    pub error_message: Option<String>,
}

/// Starts a fresh calendar session, replacing any existing one.
///
/// Input semantics:
/// - `today`: `YYYY-MM-DD`; `None`/blank reads the local clock.
/// - `week_start`: `sunday|monday`; `None` keeps the Sunday default.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_init(today: Option<String>, week_start: Option<String>) -> CalendarActionResponse {
    match CalendarConfig::from_values(today.as_deref(), week_start.as_deref()) {
        Ok(config) => {
            let today = config.today;
            *lock_session() = Some(CalendarSession::in_memory(config));
            CalendarActionResponse::success(format!("Calendar ready for {today}."), None)
        }
        Err(err) => {
            warn!("event=calendar_init module=ffi status=error");
            CalendarActionResponse::failure(
                "invalid_config",
                format!("calendar_init failed: {err}"),
            )
        }
    }
}

/// Returns the displayed month grid.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month_view() -> MonthView {
    with_session(|session| month_view(session))
}

/// Moves the displayed month back by one and returns the new grid.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_prev_month() -> MonthView {
    with_session(|session| {
        session.click_prev_month();
        month_view(session)
    })
}

/// Moves the displayed month forward by one and returns the new grid.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_next_month() -> MonthView {
    with_session(|session| {
        session.click_next_month();
        month_view(session)
    })
}

/// Opens an add draft for `day` of the displayed month.
///
/// Past days return `ok = false` without an error kind.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_click_day(day: u32) -> CalendarActionResponse {
    with_session(|session| match session.click_day(day) {
        Ok(true) => CalendarActionResponse::success("Draft opened.", None),
        Ok(false) => CalendarActionResponse::ignored("Past dates cannot take events."),
        Err(err) => CalendarActionResponse::from_session_error("calendar_click_day", &err),
    })
}

/// Opens an add draft for an explicit `YYYY-MM-DD` date.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_open_add_draft(date: String) -> CalendarActionResponse {
    let date = match CalendarDate::parse_iso(date.as_str()) {
        Ok(date) => date,
        Err(err) => {
            return CalendarActionResponse::failure(
                "invalid_date",
                format!("calendar_open_add_draft failed: {err}"),
            )
        }
    };
    with_session(|session| {
        if session.open_add_draft(date) {
            CalendarActionResponse::success("Draft opened.", None)
        } else {
            CalendarActionResponse::ignored("Past dates cannot take events.")
        }
    })
}

/// Opens an edit draft pre-filled from an existing event.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_open_edit_draft(event_id: String) -> CalendarActionResponse {
    let id = match parse_event_id("calendar_open_edit_draft", event_id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    with_session(|session| match session.open_edit_draft(id) {
        Ok(()) => CalendarActionResponse::success("Draft opened.", Some(id)),
        Err(err) => CalendarActionResponse::from_session_error("calendar_open_edit_draft", &err),
    })
}

/// Replaces draft text; input past the character limit is dropped.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_change_draft_text(text: String) -> CalendarActionResponse {
    with_session(|session| match session.change_draft_text(text.as_str()) {
        Ok(()) => CalendarActionResponse::success("Draft updated.", None),
        Err(err) => {
            CalendarActionResponse::from_session_error("calendar_change_draft_text", &err)
        }
    })
}

/// Cycles the draft hour up (`forward = true`) or down, with wrap-around.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_change_draft_hour(forward: bool) -> CalendarActionResponse {
    with_session(
        |session| match session.change_draft_hour(direction_of(forward)) {
            Ok(time) => CalendarActionResponse::success(time.to_string(), None),
            Err(err) => {
                CalendarActionResponse::from_session_error("calendar_change_draft_hour", &err)
            }
        },
    )
}

/// Cycles the draft minute up (`forward = true`) or down, with wrap-around.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_change_draft_minute(forward: bool) -> CalendarActionResponse {
    with_session(
        |session| match session.change_draft_minute(direction_of(forward)) {
            Ok(time) => CalendarActionResponse::success(time.to_string(), None),
            Err(err) => {
                CalendarActionResponse::from_session_error("calendar_change_draft_minute", &err)
            }
        },
    )
}

/// Validates and commits the open draft.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_submit_draft() -> CalendarActionResponse {
    with_session(|session| {
        let was_edit = session.draft().is_some_and(|draft| draft.is_edit());
        match session.submit_draft() {
            Ok(event) => {
                let message = if was_edit {
                    "Event updated."
                } else {
                    "Event saved."
                };
                CalendarActionResponse::success(message, Some(event.id))
            }
            Err(err) => CalendarActionResponse::from_session_error("calendar_submit_draft", &err),
        }
    })
}

/// Discards the open draft without touching saved events.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_cancel_draft() -> CalendarActionResponse {
    with_session(|session| {
        if session.cancel_draft() {
            CalendarActionResponse::success("Draft discarded.", None)
        } else {
            CalendarActionResponse::ignored("No draft was open.")
        }
    })
}

/// Deletes an event; unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_delete_event(event_id: String) -> CalendarActionResponse {
    let id = match parse_event_id("calendar_delete_event", event_id.as_str()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    with_session(|session| {
        if session.delete_event(id) {
            CalendarActionResponse::success("Event deleted.", Some(id))
        } else {
            CalendarActionResponse::ignored("Event was already gone.")
        }
    })
}

/// Lists saved events ordered by date.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_events() -> Vec<EventItem> {
    with_session(|session| session.events().iter().map(to_event_item).collect())
}

/// Returns the open draft, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_draft() -> Option<DraftView> {
    with_session(|session| {
        session.draft().map(|draft| {
            let (mode, event_id) = match draft.mode() {
                DraftMode::Add => ("add", None),
                DraftMode::Edit(id) => ("edit", Some(id.to_string())),
            };
            DraftView {
                mode: mode.to_string(),
                event_id,
                date: draft.date().to_string(),
                text: draft.text().to_string(),
                hour: draft.time_editor().hour_field(),
                minute: draft.time_editor().minute_field(),
                char_count: saturating_u32(draft.char_count()),
                max_chars: saturating_u32(draft.max_text_chars()),
                can_submit: draft.can_submit(),
                error_kind: draft.error().map(|err| err.kind().to_string()),
                error_message: draft.error().map(ToString::to_string),
            }
        })
    })
}

fn lock_session() -> std::sync::MutexGuard<'static, Option<Session>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let mut guard = lock_session();
    let session =
        guard.get_or_insert_with(|| CalendarSession::in_memory(CalendarConfig::default()));
    f(session)
}

fn month_view(session: &Session) -> MonthView {
    let cursor = session.cursor();
    let cells = match session.grid() {
        Ok(cells) => cells,
        Err(err) => {
            warn!("event=month_view module=ffi status=error year={} error={err}", cursor.year());
            Vec::new()
        }
    };
    MonthView {
        year: cursor.year(),
        month: cursor.month(),
        rows: saturating_u32(daymark_core::grid_rows(&cells)),
        cells: cells.iter().map(to_day_cell_view).collect(),
        today: session.today().to_string(),
    }
}

fn to_day_cell_view(cell: &GridCell) -> DayCellView {
    DayCellView {
        day: cell.day(),
        is_today: cell.is_today(),
    }
}

fn to_event_item(event: &Event) -> EventItem {
    EventItem {
        event_id: event.id.to_string(),
        date: event.date.to_string(),
        time: event.time.to_string(),
        text: event.text.clone(),
    }
}

fn parse_event_id(action: &str, raw: &str) -> Result<EventId, CalendarActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        CalendarActionResponse::failure(
            "invalid_id",
            format!("{action} failed: invalid event id `{}`", raw.trim()),
        )
    })
}

fn direction_of(forward: bool) -> Direction {
    if forward {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

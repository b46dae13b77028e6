//! Core calendar/event state engine for Daymark.
//! This crate is the single source of truth for navigation, draft and event
//! store invariants; presentation layers only render its state.

pub mod calendar;
pub mod config;
pub mod draft;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::navigator::{
    build_grid, days_in_month, first_weekday_offset, grid_rows, CalendarNavigator, GridCell,
    DAYS_PER_WEEK,
};
pub use config::{parse_week_start, CalendarConfig, ConfigError, WeekStart};
pub use draft::time_editor::TimeOfDayEditor;
pub use draft::{Draft, DraftMode};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::date::{
    CalendarCursor, CalendarDate, DateError, Direction, EventTime, DEFAULT_EVENT_TIME,
};
pub use model::event::{Event, EventId, EventValidationError, MAX_EVENT_TEXT_CHARS};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository, RepoError, RepoResult};
pub use service::calendar_service::{CalendarSession, SessionError};
pub use service::event_validator::{validate_event_input, ValidatedEvent};
pub use service::selection_guard::is_eligible;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

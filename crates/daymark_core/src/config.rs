//! Session configuration.
//!
//! # Responsibility
//! - Carry the injected "today" and presentation-neutral defaults into a
//!   calendar session.
//! - Parse host-provided string settings into typed values.
//!
//! # Invariants
//! - "Today" is fixed for the life of a session; nothing re-reads the clock.
//! - Unknown setting values are rejected, never silently defaulted.

use crate::model::date::{CalendarDate, DateError, EventTime, DEFAULT_EVENT_TIME};
use crate::model::event::MAX_EVENT_TEXT_CHARS;
use chrono::Weekday;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Setting value for a Sunday-first week.
pub const WEEK_START_SUNDAY: &str = "sunday";
/// Setting value for a Monday-first week.
pub const WEEK_START_MONDAY: &str = "monday";

const SUPPORTED_WEEK_START_STRINGS: &[&str] = &[WEEK_START_SUNDAY, WEEK_START_MONDAY];

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Stable string id used in host settings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => WEEK_START_SUNDAY,
            Self::Monday => WEEK_START_MONDAY,
        }
    }

    /// Column index (`0..=6`) of `weekday` in a grid starting on this day.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// Returns supported week start setting strings.
pub fn supported_week_start_strings() -> &'static [&'static str] {
    SUPPORTED_WEEK_START_STRINGS
}

/// Parses one week start from a host setting value (case-insensitive).
pub fn parse_week_start(value: &str) -> Result<WeekStart, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(ConfigError::EmptyValue("week_start"));
    }

    match normalized.as_str() {
        WEEK_START_SUNDAY => Ok(WeekStart::Sunday),
        WEEK_START_MONDAY => Ok(WeekStart::Monday),
        _ => Err(ConfigError::UnsupportedWeekStart(normalized)),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyValue(&'static str),
    UnsupportedWeekStart(String),
    InvalidToday(DateError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue(key) => write!(f, "setting `{key}` must not be empty"),
            Self::UnsupportedWeekStart(value) => write!(
                f,
                "unsupported week start `{value}`; expected {}",
                SUPPORTED_WEEK_START_STRINGS.join("|")
            ),
            Self::InvalidToday(err) => write!(f, "invalid today: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidToday(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateError> for ConfigError {
    fn from(value: DateError) -> Self {
        Self::InvalidToday(value)
    }
}

/// Inputs a calendar session needs from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Reference day for "is today" highlighting and eligibility checks.
    pub today: CalendarDate,
    /// Time pre-filled into every new add draft.
    pub default_time: EventTime,
    /// First column of the month grid.
    pub week_start: WeekStart,
    /// Draft text input limit, in characters.
    pub max_text_chars: usize,
}

impl Default for CalendarConfig {
    /// Reads the local wall clock once for `today`.
    fn default() -> Self {
        Self::with_today(CalendarDate::today())
    }
}

impl CalendarConfig {
    /// Default settings pinned to a caller-provided "today".
    pub fn with_today(today: CalendarDate) -> Self {
        Self {
            today,
            default_time: DEFAULT_EVENT_TIME,
            week_start: WeekStart::default(),
            max_text_chars: MAX_EVENT_TEXT_CHARS,
        }
    }

    /// Builds a config from host strings.
    ///
    /// - `today_iso`: `YYYY-MM-DD`; `None` or blank reads the local clock.
    /// - `week_start`: `sunday|monday`; `None` keeps the Sunday default.
    pub fn from_values(
        today_iso: Option<&str>,
        week_start: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let today = match today_iso.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => CalendarDate::parse_iso(value)?,
            None => CalendarDate::today(),
        };
        let mut config = Self::with_today(today);
        if let Some(value) = week_start {
            config.week_start = parse_week_start(value)?;
        }
        Ok(config)
    }
}

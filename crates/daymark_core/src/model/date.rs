//! Calendar value types.
//!
//! # Responsibility
//! - Define the immutable date, cursor and time-of-day values shared by
//!   navigation, drafts and the event store.
//! - Validate components at construction so invalid values never circulate.
//!
//! # Invariants
//! - Months are zero-based (`0` = January) everywhere in the public API.
//! - `CalendarDate` ordering is chronological and equality is component-wise.
//! - `EventTime` always holds `hour < 24` and `minute < 60`.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of months in a calendar year.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Hour values cycle through `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u8 = 24;
/// Minute values cycle through `0..MINUTES_PER_HOUR`.
pub const MINUTES_PER_HOUR: u8 = 60;
/// Time pre-filled into every fresh draft.
pub const DEFAULT_EVENT_TIME: EventTime = EventTime {
    hour: 9,
    minute: 0,
};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors produced when building calendar values from raw components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Month outside `0..=11`.
    InvalidMonth(u32),
    /// Day outside the valid range of the given month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Year outside the range the date backend can represent.
    UnsupportedYear(i32),
    /// Text did not match `YYYY-MM-DD`.
    Parse(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be in 0..=11, got {month}"),
            Self::InvalidDay { year, month, day } => write!(
                f,
                "day {day} does not exist in month {} of {year}",
                month + 1
            ),
            Self::UnsupportedYear(year) => write!(f, "year {year} is outside the supported range"),
            Self::Parse(value) => write!(f, "invalid date `{value}`; expected YYYY-MM-DD"),
        }
    }
}

impl Error for DateError {}

/// One step of month navigation or time cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Signed step: `-1` for backward, `+1` for forward.
    pub fn delta(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Displayed (month, year) pair of the month view.
///
/// Distinct from any selected date; only navigation moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarCursor {
    month: u32,
    year: i32,
}

impl CalendarCursor {
    /// Creates a cursor for a zero-based month.
    ///
    /// # Errors
    /// - Returns `DateError::InvalidMonth` when `month > 11`.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if month >= MONTHS_PER_YEAR {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self { month, year })
    }

    /// Cursor showing the month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the cursor one month away, rolling the year at the boundaries.
    ///
    /// Year arithmetic saturates at the `i32` limits.
    pub fn stepped(self, direction: Direction) -> Self {
        match (direction, self.month) {
            (Direction::Backward, 0) => Self {
                month: MONTHS_PER_YEAR - 1,
                year: self.year.saturating_sub(1),
            },
            (Direction::Forward, month) if month == MONTHS_PER_YEAR - 1 => Self {
                month: 0,
                year: self.year.saturating_add(1),
            },
            (Direction::Backward, month) => Self {
                month: month - 1,
                year: self.year,
            },
            (Direction::Forward, month) => Self {
                month: month + 1,
                year: self.year,
            },
        }
    }

    /// Builds the date for `day` within this cursor's month.
    pub fn date_of(&self, day: u32) -> Result<CalendarDate, DateError> {
        CalendarDate::new(self.year, self.month, day)
    }
}

/// Immutable calendar day compared by value.
///
/// Serialized as `{ "year", "month" (zero-based), "day" }`; deserialization
/// runs the same validation as [`CalendarDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CalendarDateFields", into = "CalendarDateFields")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CalendarDateFields {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<CalendarDateFields> for CalendarDate {
    type Error = DateError;

    fn try_from(value: CalendarDateFields) -> Result<Self, Self::Error> {
        Self::new(value.year, value.month, value.day)
    }
}

impl From<CalendarDate> for CalendarDateFields {
    fn from(value: CalendarDate) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

impl CalendarDate {
    /// Creates a date from year, zero-based month and one-based day.
    ///
    /// # Errors
    /// - `InvalidMonth` when `month > 11`.
    /// - `UnsupportedYear` when the backend cannot represent `year`.
    /// - `InvalidDay` when `day` is `0` or past the month's last day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if month >= MONTHS_PER_YEAR {
            return Err(DateError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(DateError::UnsupportedYear(year));
        }
        NaiveDate::from_ymd_opt(year, month + 1, day)
            .map(Self)
            .ok_or(DateError::InvalidDay { year, month, day })
    }

    /// Current local wall-clock date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses `YYYY-MM-DD` (one-based month, as humans write it).
    pub fn parse_iso(value: &str) -> Result<Self, DateError> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::Parse(trimmed.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub(crate) fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

/// Wall-clock time of an event, rendered as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventTimeFields")]
pub struct EventTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct EventTimeFields {
    hour: u32,
    minute: u32,
}

impl TryFrom<EventTimeFields> for EventTime {
    type Error = String;

    fn try_from(value: EventTimeFields) -> Result<Self, Self::Error> {
        Self::new(value.hour, value.minute).ok_or_else(|| {
            format!(
                "time {}:{} is out of range; expected hour 0-23 and minute 0-59",
                value.hour, value.minute
            )
        })
    }
}

impl EventTime {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        let hour = u8::try_from(hour).ok().filter(|h| *h < HOURS_PER_DAY)?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m < MINUTES_PER_HOUR)?;
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Moves the hour by `delta`, wrapping modulo 24. Minutes are untouched.
    pub fn cycle_hour(self, delta: i32) -> Self {
        Self {
            hour: wrap(self.hour, delta, HOURS_PER_DAY),
            minute: self.minute,
        }
    }

    /// Moves the minute by `delta`, wrapping modulo 60 without carrying into
    /// the hour.
    pub fn cycle_minute(self, delta: i32) -> Self {
        Self {
            hour: self.hour,
            minute: wrap(self.minute, delta, MINUTES_PER_HOUR),
        }
    }
}

impl Default for EventTime {
    fn default() -> Self {
        DEFAULT_EVENT_TIME
    }
}

impl Display for EventTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn wrap(value: u8, delta: i32, modulus: u8) -> u8 {
    let wrapped = (i32::from(value) + delta).rem_euclid(i32::from(modulus));
    // rem_euclid keeps the result in 0..modulus, which always fits in u8.
    wrapped as u8
}

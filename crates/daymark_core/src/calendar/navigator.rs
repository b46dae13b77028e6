//! Month cursor navigation and day-grid computation.
//!
//! # Invariants
//! - Navigation always succeeds; month 0/11 boundaries roll the year.
//! - A grid holds `first_weekday_offset` empty cells followed by exactly
//!   `days_in_month` day cells.
//! - At most one day cell is flagged `is_today`.

use crate::config::WeekStart;
use crate::model::date::{CalendarCursor, CalendarDate, DateError, Direction, MONTHS_PER_YEAR};
use chrono::Datelike;
use log::debug;

/// Columns per grid row (one per weekday).
pub const DAYS_PER_WEEK: usize = 7;

const LAST_MONTH: u32 = MONTHS_PER_YEAR - 1;
const DECEMBER_DAYS: u32 = 31;

/// One renderable slot of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Leading padding before day 1.
    Empty,
    /// A day of the displayed month.
    Day {
        day: u32,
        date: CalendarDate,
        is_today: bool,
    },
}

impl GridCell {
    /// Day number, or `None` for padding.
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Day { day, .. } => Some(*day),
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, Self::Day { is_today: true, .. })
    }
}

/// Number of days in a zero-based month, leap years included.
///
/// Computed as the day before the 1st of the following month. December is
/// always 31 days, so the last representable year keeps a full grid.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    CalendarDate::new(year, month, 1)?;
    if month == LAST_MONTH {
        return Ok(DECEMBER_DAYS);
    }
    CalendarDate::new(year, month + 1, 1)?
        .as_naive()
        .pred_opt()
        .map(|last| last.day())
        .ok_or(DateError::UnsupportedYear(year))
}

/// Grid column (`0..=6`) of day 1, relative to `week_start`.
pub fn first_weekday_offset(
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<u32, DateError> {
    let first = CalendarDate::new(year, month, 1)?;
    Ok(week_start.column_of(first.as_naive().weekday()))
}

/// Builds the padded day grid for the cursor month.
pub fn build_grid(
    cursor: CalendarCursor,
    today: CalendarDate,
    week_start: WeekStart,
) -> Result<Vec<GridCell>, DateError> {
    let offset = first_weekday_offset(cursor.year(), cursor.month(), week_start)?;
    let day_count = days_in_month(cursor.year(), cursor.month())?;

    let mut cells = Vec::with_capacity(offset as usize + day_count as usize);
    cells.extend((0..offset).map(|_| GridCell::Empty));
    for day in 1..=day_count {
        let date = cursor.date_of(day)?;
        cells.push(GridCell::Day {
            day,
            date,
            is_today: date == today,
        });
    }
    Ok(cells)
}

/// Number of 7-column rows needed to lay out `cells`.
pub fn grid_rows(cells: &[GridCell]) -> usize {
    cells.len().div_ceil(DAYS_PER_WEEK)
}

/// Owns the displayed month of one calendar session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    cursor: CalendarCursor,
    week_start: WeekStart,
}

impl CalendarNavigator {
    pub fn new(cursor: CalendarCursor, week_start: WeekStart) -> Self {
        Self { cursor, week_start }
    }

    /// Navigator opened on the month containing `today`.
    pub fn starting_at(today: CalendarDate, week_start: WeekStart) -> Self {
        Self::new(CalendarCursor::containing(today), week_start)
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Moves one month in `direction` and returns the new cursor.
    pub fn advance(&mut self, direction: Direction) -> CalendarCursor {
        self.cursor = self.cursor.stepped(direction);
        debug!(
            "event=month_navigate module=calendar status=ok direction={:?} year={} month={}",
            direction,
            self.cursor.year(),
            self.cursor.month()
        );
        self.cursor
    }

    /// Fresh grid for the current cursor month.
    pub fn grid(&self, today: CalendarDate) -> Result<Vec<GridCell>, DateError> {
        build_grid(self.cursor, today, self.week_start)
    }

    /// Day count of the current cursor month.
    pub fn days_in_month(&self) -> Result<u32, DateError> {
        days_in_month(self.cursor.year(), self.cursor.month())
    }
}

#[cfg(test)]
mod tests {
    use super::{build_grid, days_in_month, first_weekday_offset, grid_rows, GridCell};
    use crate::config::WeekStart;
    use crate::model::date::{CalendarCursor, CalendarDate, DateError};
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn september_2025_starts_on_monday() {
        assert_eq!(first_weekday_offset(2025, 8, WeekStart::Sunday), Ok(1));
        assert_eq!(first_weekday_offset(2025, 8, WeekStart::Monday), Ok(0));
    }

    #[test]
    fn grid_pads_then_lists_days_with_single_today() {
        let cursor = CalendarCursor::new(2025, 8).unwrap();
        let today = CalendarDate::new(2025, 8, 22).unwrap();
        let cells = build_grid(cursor, today, WeekStart::Sunday).unwrap();

        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0], GridCell::Empty);
        assert_eq!(cells[1].day(), Some(1));
        assert_eq!(cells.iter().filter(|cell| cell.is_today()).count(), 1);
        assert_eq!(cells[22].day(), Some(22));
        assert!(cells[22].is_today());
        assert_eq!(grid_rows(&cells), 5);
    }

    #[test]
    fn grid_has_no_today_outside_todays_month() {
        let cursor = CalendarCursor::new(2025, 9).unwrap();
        let today = CalendarDate::new(2025, 8, 22).unwrap();
        let cells = build_grid(cursor, today, WeekStart::Sunday).unwrap();
        assert!(cells.iter().all(|cell| !cell.is_today()));
    }

    #[test]
    fn last_representable_december_builds_full_grid() {
        let last_year = NaiveDate::MAX.year();
        assert_eq!(days_in_month(last_year, 11), Ok(31));
        assert_eq!(
            days_in_month(last_year.saturating_add(1), 0),
            Err(DateError::UnsupportedYear(last_year.saturating_add(1)))
        );

        let cursor = CalendarCursor::new(last_year, 11).unwrap();
        let today = CalendarDate::new(2025, 8, 22).unwrap();
        let cells = build_grid(cursor, today, WeekStart::Sunday).unwrap();
        let days: Vec<u32> = cells.iter().filter_map(GridCell::day).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }
}

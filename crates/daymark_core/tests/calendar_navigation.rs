use daymark_core::{
    build_grid, days_in_month, first_weekday_offset, grid_rows, CalendarCursor, CalendarDate,
    CalendarNavigator, DateError, Direction, GridCell, WeekStart, DAYS_PER_WEEK,
};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn advance_rolls_year_at_both_boundaries() {
    for year in [-1, 0, 1999, 2024, 2025] {
        let mut navigator =
            CalendarNavigator::new(CalendarCursor::new(year, 11).unwrap(), WeekStart::Sunday);
        let forward = navigator.advance(Direction::Forward);
        assert_eq!((forward.year(), forward.month()), (year + 1, 0));

        let back = navigator.advance(Direction::Backward);
        assert_eq!((back.year(), back.month()), (year, 11));

        let mut navigator =
            CalendarNavigator::new(CalendarCursor::new(year, 0).unwrap(), WeekStart::Sunday);
        let back = navigator.advance(Direction::Backward);
        assert_eq!((back.year(), back.month()), (year - 1, 11));
    }
}

#[test]
fn advance_inside_year_only_changes_month() {
    for month in 1..11 {
        let mut navigator =
            CalendarNavigator::new(CalendarCursor::new(2025, month).unwrap(), WeekStart::Sunday);
        assert_eq!(navigator.advance(Direction::Forward).month(), month + 1);
        assert_eq!(navigator.advance(Direction::Backward).month(), month);
        assert_eq!(navigator.advance(Direction::Backward).month(), month - 1);
        assert_eq!(navigator.cursor().year(), 2025);
    }
}

#[test]
fn twelve_steps_forward_lands_on_same_month_next_year() {
    let mut navigator = CalendarNavigator::starting_at(date(2025, 8, 22), WeekStart::Sunday);
    for _ in 0..12 {
        navigator.advance(Direction::Forward);
    }
    assert_eq!(navigator.cursor(), CalendarCursor::new(2026, 8).unwrap());
}

#[test]
fn days_in_month_accounts_for_leap_years() {
    assert_eq!(days_in_month(2024, 1), Ok(29));
    assert_eq!(days_in_month(2023, 1), Ok(28));
    assert_eq!(days_in_month(2000, 1), Ok(29));
    assert_eq!(days_in_month(1900, 1), Ok(28));
    assert_eq!(days_in_month(2025, 0), Ok(31));
    assert_eq!(days_in_month(2025, 3), Ok(30));
    assert_eq!(days_in_month(2025, 11), Ok(31));
    assert_eq!(days_in_month(2025, 12), Err(DateError::InvalidMonth(12)));
}

#[test]
fn first_weekday_offset_respects_week_start() {
    // 2025-06-01 is a Sunday.
    assert_eq!(first_weekday_offset(2025, 5, WeekStart::Sunday), Ok(0));
    assert_eq!(first_weekday_offset(2025, 5, WeekStart::Monday), Ok(6));
    // 2024-02-01 is a Thursday.
    assert_eq!(first_weekday_offset(2024, 1, WeekStart::Sunday), Ok(4));
}

#[test]
fn grid_shape_is_consistent_for_every_month_of_several_years() {
    let today = date(2025, 8, 22);
    for year in [2023, 2024, 2025, 2100] {
        for month in 0..12 {
            let cursor = CalendarCursor::new(year, month).unwrap();
            for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                let cells = build_grid(cursor, today, week_start).unwrap();
                let offset = first_weekday_offset(year, month, week_start).unwrap() as usize;
                let days = days_in_month(year, month).unwrap() as usize;

                assert!(offset < DAYS_PER_WEEK);
                assert_eq!(cells.len(), offset + days);
                assert!(cells[..offset].iter().all(|cell| *cell == GridCell::Empty));
                let numbers: Vec<u32> = cells[offset..].iter().filter_map(GridCell::day).collect();
                assert_eq!(numbers, (1..=days as u32).collect::<Vec<_>>());
                assert!(grid_rows(&cells) * DAYS_PER_WEEK >= cells.len());
                assert!(grid_rows(&cells) <= 6);
            }
        }
    }
}

#[test]
fn grid_day_cells_carry_their_dates() {
    let cursor = CalendarCursor::new(2024, 1).unwrap();
    let cells = build_grid(cursor, date(2024, 1, 29), WeekStart::Sunday).unwrap();
    let last = cells.last().copied().unwrap();
    assert_eq!(
        last,
        GridCell::Day {
            day: 29,
            date: date(2024, 1, 29),
            is_today: true,
        }
    );
}

#[test]
fn grid_is_rebuilt_after_navigation() {
    let today = date(2025, 8, 22);
    let mut navigator = CalendarNavigator::starting_at(today, WeekStart::Sunday);
    let september = navigator.grid(today).unwrap();
    navigator.advance(Direction::Forward);
    let october = navigator.grid(today).unwrap();

    assert_eq!(september.iter().filter(|cell| cell.is_today()).count(), 1);
    assert!(october.iter().all(|cell| !cell.is_today()));
    // 2025-10-01 is a Wednesday.
    assert_eq!(october.iter().take_while(|cell| cell.day().is_none()).count(), 3);
    assert_eq!(navigator.days_in_month(), Ok(31));
}

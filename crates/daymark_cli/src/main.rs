//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daymark_core` linkage.
//! - Print a plain-text month grid so navigation can be eyeballed quickly.
//!
//! Usage: `daymark [YYYY-MM-DD]` (defaults to the local date).

use daymark_core::{CalendarConfig, CalendarSession, GridCell, WeekStart, DAYS_PER_WEEK};
use std::process::ExitCode;

const SUNDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
const MONDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

fn main() -> ExitCode {
    println!("daymark_core ping={}", daymark_core::ping());
    println!("daymark_core version={}", daymark_core::core_version());

    let today_arg = std::env::args().nth(1);
    let config = match CalendarConfig::from_values(today_arg.as_deref(), None) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let session = CalendarSession::in_memory(config);
    let cursor = session.cursor();
    let cells = match session.grid() {
        Ok(cells) => cells,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("today={}", session.today());
    println!();
    println!("{:04}-{:02}", cursor.year(), cursor.month() + 1);
    println!(
        "{}",
        match session.config().week_start {
            WeekStart::Sunday => SUNDAY_HEADER,
            WeekStart::Monday => MONDAY_HEADER,
        }
    );
    for row in cells.chunks(DAYS_PER_WEEK) {
        let line = row.iter().map(render_cell).collect::<Vec<_>>().join(" ");
        println!("{}", line.trim_end());
    }
    ExitCode::SUCCESS
}

fn render_cell(cell: &GridCell) -> String {
    match cell {
        GridCell::Empty => "  ".to_string(),
        GridCell::Day { day, .. } => format!("{day:>2}"),
    }
}

//! Circular hour/minute editor backing the draft time picker.

use crate::model::date::{Direction, EventTime};

/// Holds the draft time and cycles its fields with wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDayEditor {
    time: EventTime,
}

impl TimeOfDayEditor {
    pub fn new(time: EventTime) -> Self {
        Self { time }
    }

    pub fn time(&self) -> EventTime {
        self.time
    }

    pub fn increment_hour(&mut self) {
        self.step_hour(Direction::Forward);
    }

    pub fn decrement_hour(&mut self) {
        self.step_hour(Direction::Backward);
    }

    pub fn increment_minute(&mut self) {
        self.step_minute(Direction::Forward);
    }

    pub fn decrement_minute(&mut self) {
        self.step_minute(Direction::Backward);
    }

    /// 23 -> 0 forward, 0 -> 23 backward.
    pub fn step_hour(&mut self, direction: Direction) {
        self.time = self.time.cycle_hour(direction.delta());
    }

    /// 59 -> 0 forward, 0 -> 59 backward.
    pub fn step_minute(&mut self, direction: Direction) {
        self.time = self.time.cycle_minute(direction.delta());
    }

    /// Zero-padded hour as shown in the time input.
    pub fn hour_field(&self) -> String {
        format!("{:02}", self.time.hour())
    }

    /// Zero-padded minute as shown in the time input.
    pub fn minute_field(&self) -> String {
        format!("{:02}", self.time.minute())
    }
}

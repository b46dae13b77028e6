//! Event store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Own the session's event collection and its ordering.
//! - Reject duplicate entries on creation.
//!
//! # Invariants
//! - The collection is sorted ascending by date after every mutation; the sort
//!   is stable, so same-day events keep insertion order.
//! - No two events created through `add_event` share (date, time, text).
//!   `edit_event` deliberately skips that check.
//! - Every mutation is all-or-nothing.

use crate::model::date::{CalendarDate, EventTime};
use crate::model::event::{Event, EventId, EventValidationError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Event store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(EventValidationError),
    /// An event with the same date, time and text already exists.
    DuplicateEvent {
        existing: EventId,
        date: CalendarDate,
        time: EventTime,
    },
    NotFound(EventId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateEvent { date, time, .. } => {
                write!(f, "an identical event already exists on {date} at {time}")
            }
            Self::NotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateEvent { .. } | Self::NotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for RepoError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface over the event collection.
pub trait EventRepository {
    /// Creates an event with a fresh id, rejecting exact duplicates.
    fn add_event(&mut self, date: CalendarDate, time: EventTime, text: &str)
        -> RepoResult<Event>;
    /// Replaces the event with `id`, keeping the id. No duplicate check.
    fn edit_event(
        &mut self,
        id: EventId,
        date: CalendarDate,
        time: EventTime,
        text: &str,
    ) -> RepoResult<Event>;
    /// Removes the event with `id`. Returns `false` when it was absent.
    fn delete_event(&mut self, id: EventId) -> bool;
    fn get_event(&self, id: EventId) -> Option<Event>;
    /// Snapshot of the sorted collection.
    fn list_events(&self) -> Vec<Event>;

    fn event_count(&self) -> usize {
        self.list_events().len()
    }
}

/// Memory-resident event store living for one session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on `date`, in collection order.
    pub fn events_on(&self, date: CalendarDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect()
    }

    fn sort_by_date(&mut self) {
        // `sort_by_key` is stable; time of day is not a key.
        self.events.sort_by_key(|event| event.date);
    }
}

impl EventRepository for InMemoryEventRepository {
    fn add_event(
        &mut self,
        date: CalendarDate,
        time: EventTime,
        text: &str,
    ) -> RepoResult<Event> {
        let event = Event::new(date, time, text)?;

        if let Some(existing) = self
            .events
            .iter()
            .find(|candidate| candidate.same_entry(event.date, event.time, &event.text))
        {
            warn!(
                "event=event_add module=repo status=duplicate existing_id={} date={}",
                existing.id, date
            );
            return Err(RepoError::DuplicateEvent {
                existing: existing.id,
                date,
                time,
            });
        }

        self.events.push(event.clone());
        self.sort_by_date();
        info!(
            "event=event_add module=repo status=ok id={} date={} total={}",
            event.id,
            event.date,
            self.events.len()
        );
        Ok(event)
    }

    fn edit_event(
        &mut self,
        id: EventId,
        date: CalendarDate,
        time: EventTime,
        text: &str,
    ) -> RepoResult<Event> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(RepoError::NotFound(id))?;
        let replacement = Event::with_id(id, date, time, text)?;

        self.events[index] = replacement.clone();
        self.sort_by_date();
        info!(
            "event=event_edit module=repo status=ok id={} date={}",
            id, replacement.date
        );
        Ok(replacement)
    }

    fn delete_event(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        if removed {
            info!("event=event_delete module=repo status=ok id={id}");
        } else {
            debug!("event=event_delete module=repo status=noop id={id}");
        }
        removed
    }

    fn get_event(&self, id: EventId) -> Option<Event> {
        self.events.iter().find(|event| event.id == id).cloned()
    }

    fn list_events(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn event_count(&self) -> usize {
        self.events.len()
    }
}

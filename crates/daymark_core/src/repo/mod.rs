//! Event store layer.
//!
//! # Responsibility
//! - Define the storage contract used by the session service.
//! - Provide the memory-resident implementation used for a session.
//!
//! # Invariants
//! - Repository writes build events through `Event::new`/`Event::with_id`, so
//!   text validation runs before any mutation.
//! - Repository APIs return semantic errors (`DuplicateEvent`, `NotFound`).

pub mod event_repo;

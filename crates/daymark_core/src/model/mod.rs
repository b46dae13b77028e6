//! Calendar domain model.
//!
//! # Responsibility
//! - Define the value types consumed by navigation, drafts and storage.
//! - Keep construction-time validation next to the data it protects.
//!
//! # Invariants
//! - Dates and times are immutable values compared component-wise.
//! - Every event is identified by a stable `EventId`.

pub mod date;
pub mod event;

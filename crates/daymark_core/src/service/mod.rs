//! Core use-case services.
//!
//! # Responsibility
//! - Validate candidate input and guard date eligibility.
//! - Orchestrate navigator, draft and repository calls behind intent-level APIs.

pub mod calendar_service;
pub mod event_validator;
pub mod selection_guard;

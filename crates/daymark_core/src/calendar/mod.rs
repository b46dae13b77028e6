//! Month view navigation and grid layout.
//!
//! # Responsibility
//! - Track the displayed month and move it one step at a time.
//! - Compute the padded day grid the presentation layer renders.
//!
//! # Invariants
//! - The grid is derived data, rebuilt on request and never cached.

pub mod navigator;

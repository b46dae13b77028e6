//! Flutter-facing bindings for the Daymark calendar core.

pub mod api;

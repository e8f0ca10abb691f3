//! Domain model for per-user bookmark sets.
//!
//! # Responsibility
//! - Define identifiers shared by store, service and view layers.
//! - Define the read-only content shape returned by host content lookup.
//!
//! # Invariants
//! - Identifiers are non-zero; zero is the "no id" sentinel at the boundary.
//! - A bookmark carries no metadata besides its position in the user's sequence.

pub mod content;
pub mod ids;

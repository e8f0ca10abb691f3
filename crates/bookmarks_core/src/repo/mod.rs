//! Bookmark persistence over the per-user storage collaborator.
//!
//! # Responsibility
//! - Own the stored shape of a user's bookmark sequence.
//! - Keep JSON decoding and defensive coercion out of service code.
//!
//! # Invariants
//! - A content id appears at most once per user's sequence.
//! - Malformed stored data reads as an empty sequence, never as an error.

pub mod bookmark_repo;

//! Structured view-models for bookmark UI surfaces.
//!
//! # Responsibility
//! - Turn bookmark state into data a templating layer renders.
//! - Keep markup, escaping and date/permalink formatting out of core.
//!
//! # Invariants
//! - View builders never mutate bookmark state.
//! - List views are newest-first.

pub mod button;
pub mod excerpt;
pub mod list;

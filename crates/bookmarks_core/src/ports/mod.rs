//! Collaborator contracts implemented by the host system.
//!
//! # Responsibility
//! - Describe what the core needs from identity, per-user storage and content
//!   lookup, without assuming how the host provides it.
//! - Describe the request-token check the boundary layer performs.
//!
//! # Invariants
//! - Every contract is synchronous and request-scoped.
//! - Shared references to an implementation are implementations too, so one
//!   collaborator can back several components.

pub mod content_lookup;
pub mod identity;
pub mod request_token;
pub mod user_meta;

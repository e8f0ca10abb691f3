//! Transport-facing boundary for the bookmarks core.
//!
//! # Responsibility
//! - Expose use-case level handlers a host transport can call directly.
//! - Keep loosely-typed request data out of the core.

pub mod api;
pub mod envelope;
pub mod params;

pub use api::{core_version, init_logging, ping, ActionRequest, BookmarkApi};
pub use envelope::{ActionResponse, Failure, ResponseData};
pub use params::{parse_button_options, parse_list_options, Attributes, ButtonRequest};

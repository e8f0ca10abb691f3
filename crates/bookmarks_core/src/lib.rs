//! Core domain logic for per-user content bookmarks.
//! This crate is the single source of truth for bookmark invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod ports;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{BookmarkConfig, ConfigError};
pub use db::SqliteUserMetaStore;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::content::ContentItem;
pub use model::ids::{parse_loose_int, ContentId, UserId, ZeroIdError};
pub use ports::content_lookup::ContentLookup;
pub use ports::identity::{IdentityProvider, StaticIdentity};
pub use ports::request_token::{RequestTokenVerifier, BOOKMARK_TOKEN_SCOPE};
pub use ports::user_meta::{StorageError, StorageResult, UserMetaStorage};
pub use repo::bookmark_repo::{decode_bookmark_ids, BookmarkStore, DEFAULT_META_KEY};
pub use service::bookmark_service::{
    BookmarkError, BookmarkResult, BookmarkService, RemoveOutcome, ToggleOutcome,
};
pub use view::button::{button_view, ButtonIcon, ButtonOptions, ButtonState, ButtonView};
pub use view::excerpt::{build_excerpt, trim_words, truncate_chars};
pub use view::list::{
    count_label, BookmarkListItem, BookmarkListRenderer, BookmarkListView, EmptyReason,
    ListOptions, ListView,
};

/// Minimal health-check API for host integration probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

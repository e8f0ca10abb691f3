//! Host-facing configuration for the bookmarks core.
//!
//! # Responsibility
//! - Collect the tunables hosts may override in one deserializable struct.
//! - Build configured components without ambient global state.
//!
//! # Invariants
//! - Every field has a default; an empty document is a valid config.
//! - `meta_key` must be non-blank; `validate` rejects blank keys.

use crate::ports::content_lookup::ContentLookup;
use crate::ports::identity::IdentityProvider;
use crate::ports::user_meta::UserMetaStorage;
use crate::repo::bookmark_repo::{BookmarkStore, DEFAULT_META_KEY};
use crate::service::bookmark_service::BookmarkService;
use crate::view::button::ButtonOptions;
use crate::view::excerpt::EXCERPT_WORDS;
use crate::view::list::{BookmarkListRenderer, ListOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunables for store, list and button surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    /// User-meta key holding the bookmark sequence.
    pub meta_key: String,
    /// Defaults for list views when the caller passes no options.
    pub list: ListOptions,
    /// Default button labels.
    pub button: ButtonOptions,
    /// Word count for body-derived excerpts.
    pub excerpt_words: usize,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            meta_key: DEFAULT_META_KEY.to_string(),
            list: ListOptions::default(),
            button: ButtonOptions::default(),
            excerpt_words: EXCERPT_WORDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyMetaKey,
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMetaKey => write!(f, "meta_key must not be empty"),
            Self::Parse(message) => write!(f, "invalid bookmark config: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl BookmarkConfig {
    /// Parses a JSON config document and validates it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meta_key.trim().is_empty() {
            return Err(ConfigError::EmptyMetaKey);
        }
        Ok(())
    }

    pub fn store<M: UserMetaStorage>(&self, storage: M) -> BookmarkStore<M> {
        BookmarkStore::with_meta_key(storage, self.meta_key.trim())
    }

    pub fn service<M, C, I>(&self, storage: M, content: C, identity: I) -> BookmarkService<M, C, I>
    where
        M: UserMetaStorage,
        C: ContentLookup,
        I: IdentityProvider,
    {
        BookmarkService::new(self.store(storage), content, identity)
    }

    pub fn renderer<M, C, I>(
        &self,
        storage: M,
        content: C,
        identity: I,
    ) -> BookmarkListRenderer<M, C, I>
    where
        M: UserMetaStorage,
        C: ContentLookup,
        I: IdentityProvider,
    {
        BookmarkListRenderer::new(self.store(storage), content, identity)
            .with_excerpt_words(self.excerpt_words)
    }
}

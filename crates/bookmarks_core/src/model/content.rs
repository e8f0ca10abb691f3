//! Content item shape returned by the host content store.

use crate::model::ids::ContentId;
use serde::{Deserialize, Serialize};

/// Published content item resolved through `ContentLookup`.
///
/// Formatting (dates, permalinks, escaping) is owned by the host; the core
/// only selects and trims fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    pub permalink: String,
    /// Unix epoch milliseconds.
    pub published_at: i64,
    /// Category names in host order; the first one is the primary category.
    pub categories: Vec<String>,
    /// Explicit excerpt. Empty strings are treated as absent.
    pub excerpt: Option<String>,
    /// Full body, possibly containing markup.
    pub body: String,
}

impl ContentItem {
    /// First category name, if any.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Explicit excerpt when it carries any non-whitespace text.
    pub fn explicit_excerpt(&self) -> Option<&str> {
        self.excerpt
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

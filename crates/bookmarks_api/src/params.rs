//! Loosely-typed attribute parsing into typed core options.
//!
//! # Invariants
//! - Unknown keys are ignored; missing keys take the configured default.
//! - Integers use integer-prefix semantics; unparsable values become `0`.
//! - `show_excerpt` is enabled only by the literal `"true"`.

use bookmarks_core::{parse_loose_int, ButtonOptions, ContentId, ListOptions};
use std::collections::BTreeMap;

/// Raw attribute map as received from a template or request.
pub type Attributes = BTreeMap<String, String>;

pub const ATTR_POSTS_PER_PAGE: &str = "posts_per_page";
pub const ATTR_SHOW_EXCERPT: &str = "show_excerpt";
pub const ATTR_EXCERPT_LENGTH: &str = "excerpt_length";
pub const ATTR_POST_ID: &str = "post_id";
pub const ATTR_TEXT: &str = "text";
pub const ATTR_BOOKMARKED_TEXT: &str = "bookmarked_text";

/// Typed button request after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRequest {
    /// `None` when no usable content id was given or inferred.
    pub content_id: Option<ContentId>,
    pub options: ButtonOptions,
}

pub fn parse_list_options(attrs: &Attributes, defaults: &ListOptions) -> ListOptions {
    ListOptions {
        limit: attrs
            .get(ATTR_POSTS_PER_PAGE)
            .map_or(defaults.limit, |raw| int_or_zero(raw)),
        include_excerpt: attrs
            .get(ATTR_SHOW_EXCERPT)
            .map_or(defaults.include_excerpt, |raw| raw == "true"),
        excerpt_max_chars: attrs
            .get(ATTR_EXCERPT_LENGTH)
            .map_or(defaults.excerpt_max_chars, |raw| int_or_zero(raw)),
    }
}

/// Parses button attributes; `current` is the content being displayed, used
/// when `post_id` is absent.
pub fn parse_button_options(
    attrs: &Attributes,
    defaults: &ButtonOptions,
    current: Option<ContentId>,
) -> ButtonRequest {
    let content_id = match attrs.get(ATTR_POST_ID) {
        Some(raw) => ContentId::parse_loose(raw),
        None => current,
    };

    ButtonRequest {
        content_id,
        options: ButtonOptions {
            label: attrs
                .get(ATTR_TEXT)
                .cloned()
                .unwrap_or_else(|| defaults.label.clone()),
            bookmarked_label: attrs
                .get(ATTR_BOOKMARKED_TEXT)
                .cloned()
                .unwrap_or_else(|| defaults.bookmarked_label.clone()),
        },
    }
}

fn int_or_zero(raw: &str) -> i64 {
    parse_loose_int(raw).unwrap_or(0)
}

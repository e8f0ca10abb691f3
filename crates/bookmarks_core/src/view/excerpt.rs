//! Excerpt derivation and truncation for list items.
//!
//! # Invariants
//! - Word trimming counts whitespace-separated words after markup is removed.
//! - Hard truncation counts characters, not bytes, and may cut mid-word.

use crate::model::content::ContentItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// Word count used when deriving an excerpt from the body.
pub const EXCERPT_WORDS: usize = 20;
/// Appended when word trimming dropped words.
pub const WORD_TRIM_MARKER: &str = "\u{2026}";
/// Appended when hard truncation shortened the excerpt.
pub const TRUNCATION_MARKER: &str = "...";

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("valid script/style regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

/// Builds the displayed excerpt for one item.
///
/// Rules:
/// - explicit excerpt wins when non-blank, otherwise the body is trimmed to
///   `max_words` words;
/// - then `truncate_chars(_, max_chars)` applies.
pub fn build_excerpt(item: &ContentItem, max_words: usize, max_chars: i64) -> String {
    let base = match item.explicit_excerpt() {
        Some(excerpt) => excerpt.to_string(),
        None => trim_words(&item.body, max_words),
    };
    truncate_chars(&base, max_chars)
}

/// Strips markup and keeps the first `max_words` words.
///
/// Whitespace runs collapse to single spaces. `WORD_TRIM_MARKER` is appended
/// only when words were dropped. `max_words == 0` disables trimming.
pub fn trim_words(text: &str, max_words: usize) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(text, " ");
    let plain = TAG_RE.replace_all(&without_blocks, " ");
    let words = plain.split_whitespace().collect::<Vec<_>>();

    if max_words == 0 || words.len() <= max_words {
        return words.join(" ");
    }

    let mut trimmed = words[..max_words].join(" ");
    trimmed.push_str(WORD_TRIM_MARKER);
    trimmed
}

/// Cuts `text` to `max_chars` characters and appends `TRUNCATION_MARKER`.
///
/// Leaves `text` untouched when `max_chars <= 0` or it already fits.
pub fn truncate_chars(text: &str, max_chars: i64) -> String {
    let Ok(limit) = usize::try_from(max_chars) else {
        return text.to_string();
    };
    if limit == 0 || text.chars().count() <= limit {
        return text.to_string();
    }

    let mut truncated = text.chars().take(limit).collect::<String>();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

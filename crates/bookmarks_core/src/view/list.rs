//! Paginated, newest-first bookmark list view.
//!
//! # Responsibility
//! - Select which bookmarks are shown (order, limit) and resolve them to
//!   content items.
//! - Distinguish "nothing bookmarked" from "nothing resolvable".
//!
//! # Invariants
//! - Display order is the reverse of bookmarking order.
//! - `limit` is applied before resolution, so dropped items are not
//!   backfilled from older bookmarks.
//! - Unresolvable items are skipped, never surfaced as errors.

use crate::model::content::ContentItem;
use crate::model::ids::{ContentId, UserId};
use crate::ports::content_lookup::ContentLookup;
use crate::ports::identity::IdentityProvider;
use crate::ports::user_meta::{StorageResult, UserMetaStorage};
use crate::repo::bookmark_repo::BookmarkStore;
use crate::view::excerpt::{build_excerpt, EXCERPT_WORDS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Default number of items shown.
pub const DEFAULT_LIST_LIMIT: i64 = 10;
/// Default excerpt character limit.
pub const DEFAULT_EXCERPT_MAX_CHARS: i64 = 150;

/// Typed list options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Maximum items shown; `0` or negative means unlimited.
    pub limit: i64,
    pub include_excerpt: bool,
    /// Hard character cap for excerpts; `0` or negative disables it.
    pub excerpt_max_chars: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            include_excerpt: true,
            excerpt_max_chars: DEFAULT_EXCERPT_MAX_CHARS,
        }
    }
}

/// Why a list view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReason {
    /// The user has never bookmarked anything, or removed everything.
    NoBookmarks,
    /// Bookmarks exist but none of the shown ones resolve to content.
    AllResolvedAway,
}

impl EmptyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoBookmarks => "no-bookmarks",
            Self::AllResolvedAway => "all-resolved-away",
        }
    }
}

/// One displayed bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkListItem {
    /// Target of the per-item remove action.
    pub content_id: ContentId,
    pub title: String,
    pub permalink: String,
    /// Unix epoch milliseconds; formatting is left to the template.
    pub published_at: i64,
    pub primary_category: Option<String>,
    /// Present only when excerpts were requested.
    pub excerpt: Option<String>,
}

/// Non-empty list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Length of the stored sequence, independent of limit and resolution.
    pub total_count: usize,
    /// Ids left after the limit, counted before resolution.
    pub shown_count: usize,
    pub items: Vec<BookmarkListItem>,
}

impl ListView {
    /// Header label over `shown_count`, e.g. `1 bookmark` or `3 bookmarks`.
    pub fn count_label(&self) -> String {
        count_label(self.shown_count)
    }
}

/// Result of `BookmarkListRenderer::build_view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookmarkListView {
    LoginRequired,
    Empty { reason: EmptyReason },
    List(ListView),
}

/// Formats a bookmark count with singular/plural noun.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 bookmark".to_string()
    } else {
        format!("{count} bookmarks")
    }
}

/// Builds list views from a store and a content lookup collaborator.
pub struct BookmarkListRenderer<M, C, I>
where
    M: UserMetaStorage,
    C: ContentLookup,
    I: IdentityProvider,
{
    store: BookmarkStore<M>,
    content: C,
    identity: I,
    excerpt_words: usize,
}

impl<M, C, I> BookmarkListRenderer<M, C, I>
where
    M: UserMetaStorage,
    C: ContentLookup,
    I: IdentityProvider,
{
    pub fn new(store: BookmarkStore<M>, content: C, identity: I) -> Self {
        Self {
            store,
            content,
            identity,
            excerpt_words: EXCERPT_WORDS,
        }
    }

    /// Overrides the word count used for body-derived excerpts.
    pub fn with_excerpt_words(mut self, excerpt_words: usize) -> Self {
        self.excerpt_words = excerpt_words;
        self
    }

    /// Builds the view for the current caller.
    ///
    /// Anonymous callers get `LoginRequired`.
    pub fn build_view(&self, options: &ListOptions) -> StorageResult<BookmarkListView> {
        match self.identity.authenticated_user() {
            Some(user_id) => self.build_view_for(user_id, options),
            None => Ok(BookmarkListView::LoginRequired),
        }
    }

    /// Builds the view for an already resolved user.
    pub fn build_view_for(
        &self,
        user_id: UserId,
        options: &ListOptions,
    ) -> StorageResult<BookmarkListView> {
        let stored = self.store.list(user_id)?;
        if stored.is_empty() {
            return Ok(BookmarkListView::Empty {
                reason: EmptyReason::NoBookmarks,
            });
        }

        let total_count = stored.len();
        let shown = select_shown(stored, options.limit);
        let shown_count = shown.len();

        let mut items = Vec::with_capacity(shown_count);
        for content_id in shown {
            if let Some(item) = self.content.get_content_by_id(content_id)? {
                items.push(self.to_list_item(item, options));
            }
        }

        debug!(
            "event=bookmark_list_build module=view status=ok user_id={} total={} shown={} resolved={}",
            user_id,
            total_count,
            shown_count,
            items.len()
        );

        if items.is_empty() {
            return Ok(BookmarkListView::Empty {
                reason: EmptyReason::AllResolvedAway,
            });
        }

        Ok(BookmarkListView::List(ListView {
            total_count,
            shown_count,
            items,
        }))
    }

    fn to_list_item(&self, item: ContentItem, options: &ListOptions) -> BookmarkListItem {
        let excerpt = options
            .include_excerpt
            .then(|| build_excerpt(&item, self.excerpt_words, options.excerpt_max_chars));

        BookmarkListItem {
            content_id: item.id,
            primary_category: item.primary_category().map(str::to_string),
            title: item.title,
            permalink: item.permalink,
            published_at: item.published_at,
            excerpt,
        }
    }
}

/// Reverses to newest-first, then keeps the first `limit` ids when positive.
fn select_shown(mut stored: Vec<ContentId>, limit: i64) -> Vec<ContentId> {
    stored.reverse();
    if let Ok(limit) = usize::try_from(limit) {
        if limit > 0 {
            stored.truncate(limit);
        }
    }
    stored
}

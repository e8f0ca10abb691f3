//! Bookmark use-case service.
//!
//! # Responsibility
//! - Resolve the caller through `IdentityProvider` before any mutation.
//! - Validate toggle targets through `ContentLookup`.
//! - Provide toggle/remove/status entry points over `BookmarkStore`.
//!
//! # Invariants
//! - Failed authorization or validation never touches storage.
//! - Counts returned after a mutation are re-read from storage.
//! - Toggle is its own inverse but not idempotent: repeated calls alternate
//!   state. Guarding against double submission is the caller's job.

use crate::model::ids::{ContentId, UserId};
use crate::ports::content_lookup::ContentLookup;
use crate::ports::identity::IdentityProvider;
use crate::ports::user_meta::{StorageError, StorageResult, UserMetaStorage};
use crate::repo::bookmark_repo::BookmarkStore;
use crate::view::button::{button_view, ButtonOptions, ButtonView};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Service error for bookmark use-cases.
#[derive(Debug)]
pub enum BookmarkError {
    /// No authenticated user could be resolved.
    Unauthorized,
    /// Content id does not resolve to an existing, published item.
    InvalidTarget(ContentId),
    /// Storage or lookup collaborator failure, propagated unchanged.
    Storage(StorageError),
}

impl Display for BookmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "no authenticated user"),
            Self::InvalidTarget(content_id) => write!(f, "invalid bookmark target: {content_id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for BookmarkError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Result of a toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// Membership state after the toggle.
    pub bookmarked: bool,
    /// Sequence length re-read after the mutation.
    pub count: usize,
}

/// Result of a remove call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoveOutcome {
    pub count: usize,
}

/// Bookmark service facade over store, content lookup and identity.
pub struct BookmarkService<M, C, I>
where
    M: UserMetaStorage,
    C: ContentLookup,
    I: IdentityProvider,
{
    store: BookmarkStore<M>,
    content: C,
    identity: I,
}

impl<M, C, I> BookmarkService<M, C, I>
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
        }
    }

    pub fn store(&self) -> &BookmarkStore<M> {
        &self.store
    }

    /// Flips membership of `content_id` for the current user.
    ///
    /// # Errors
    /// - `Unauthorized` when no authenticated user resolves.
    /// - `InvalidTarget` when content lookup does not find a published item.
    /// - `Storage` for collaborator failures.
    pub fn toggle(&self, content_id: ContentId) -> BookmarkResult<ToggleOutcome> {
        let user_id = self.require_user("toggle")?;

        if self.content.get_content_by_id(content_id)?.is_none() {
            warn!(
                "event=bookmark_toggle module=service status=rejected reason=invalid_target user_id={} content_id={}",
                user_id, content_id
            );
            return Err(BookmarkError::InvalidTarget(content_id));
        }

        let bookmarked = if self.store.contains(user_id, content_id)? {
            self.store.remove(user_id, content_id)?;
            false
        } else {
            self.store.add(user_id, content_id)?;
            true
        };
        let count = self.store.count(user_id)?;

        info!(
            "event=bookmark_toggle module=service status=ok user_id={} content_id={} bookmarked={} count={}",
            user_id, content_id, bookmarked, count
        );
        Ok(ToggleOutcome { bookmarked, count })
    }

    /// Removes `content_id` for the current user if present.
    ///
    /// Content existence is not checked so stale references to deleted items
    /// can still be cleaned up.
    pub fn remove_only(&self, content_id: ContentId) -> BookmarkResult<RemoveOutcome> {
        let user_id = self.require_user("remove")?;

        let removed = self.store.remove(user_id, content_id)?;
        let count = self.store.count(user_id)?;

        info!(
            "event=bookmark_remove module=service status=ok user_id={} content_id={} removed={} count={}",
            user_id, content_id, removed, count
        );
        Ok(RemoveOutcome { count })
    }

    /// Returns membership for the current user; `false` for anonymous callers.
    pub fn is_bookmarked(&self, content_id: ContentId) -> StorageResult<bool> {
        self.is_bookmarked_by(content_id, None)
    }

    /// Builds the button view-model for the current caller.
    ///
    /// Anonymous callers always see the default (not bookmarked) state.
    pub fn button(&self, content_id: ContentId, options: &ButtonOptions) -> StorageResult<ButtonView> {
        let bookmarked = self.is_bookmarked(content_id)?;
        Ok(button_view(content_id, bookmarked, options))
    }

    /// Returns the bookmark sequence of `user`, or of the current user when
    /// `user` is `None`. Empty when neither resolves.
    pub fn bookmarks_of(&self, user: Option<UserId>) -> StorageResult<Vec<ContentId>> {
        match self.resolve(user) {
            Some(user_id) => self.store.list(user_id),
            None => Ok(Vec::new()),
        }
    }

    /// Membership check with the same user fallback as `bookmarks_of`.
    pub fn is_bookmarked_by(
        &self,
        content_id: ContentId,
        user: Option<UserId>,
    ) -> StorageResult<bool> {
        match self.resolve(user) {
            Some(user_id) => self.store.contains(user_id, content_id),
            None => Ok(false),
        }
    }

    /// Bookmark count with the same user fallback as `bookmarks_of`.
    pub fn count_of(&self, user: Option<UserId>) -> StorageResult<usize> {
        match self.resolve(user) {
            Some(user_id) => self.store.count(user_id),
            None => Ok(0),
        }
    }

    fn resolve(&self, user: Option<UserId>) -> Option<UserId> {
        user.or_else(|| self.identity.authenticated_user())
    }

    fn require_user(&self, operation: &'static str) -> BookmarkResult<UserId> {
        self.identity.authenticated_user().ok_or_else(|| {
            warn!(
                "event=bookmark_{} module=service status=rejected reason=unauthorized",
                operation
            );
            BookmarkError::Unauthorized
        })
    }
}

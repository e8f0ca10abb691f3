//! Per-user ordered bookmark set.
//!
//! # Responsibility
//! - Provide add/remove/contains/list/count over one user's sequence.
//! - Persist through `UserMetaStorage` under a fixed meta key.
//!
//! # Invariants
//! - Insertion order is bookmarking order; `add` appends.
//! - `remove` compacts the sequence and keeps the relative order of the rest.
//! - No-op calls (`add` of a present id, `remove` of an absent id) never write.
//! - Each mutation is read-then-write with no locking; concurrent writers race
//!   with last-write-wins semantics.

use crate::model::ids::{ContentId, UserId};
use crate::ports::user_meta::{StorageResult, UserMetaStorage};
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

/// Meta key the bookmark sequence is stored under unless configured otherwise.
pub const DEFAULT_META_KEY: &str = "user_bookmarks";

/// Bookmark set store backed by a per-user key-value collaborator.
pub struct BookmarkStore<M: UserMetaStorage> {
    storage: M,
    meta_key: String,
}

impl<M: UserMetaStorage> BookmarkStore<M> {
    /// Creates a store using `DEFAULT_META_KEY`.
    pub fn new(storage: M) -> Self {
        Self::with_meta_key(storage, DEFAULT_META_KEY)
    }

    pub fn with_meta_key(storage: M, meta_key: impl Into<String>) -> Self {
        Self {
            storage,
            meta_key: meta_key.into(),
        }
    }

    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    /// Appends `content_id` unless already present.
    ///
    /// Returns `true` when inserted, `false` when it was already bookmarked.
    pub fn add(&self, user_id: UserId, content_id: ContentId) -> StorageResult<bool> {
        let mut ids = self.list(user_id)?;
        if ids.contains(&content_id) {
            return Ok(false);
        }

        ids.push(content_id);
        self.persist(user_id, &ids)?;
        debug!(
            "event=bookmark_add module=repo status=ok user_id={} content_id={} count={}",
            user_id,
            content_id,
            ids.len()
        );
        Ok(true)
    }

    /// Removes `content_id` if present.
    ///
    /// Returns `true` when removed, `false` when it was not bookmarked.
    pub fn remove(&self, user_id: UserId, content_id: ContentId) -> StorageResult<bool> {
        let mut ids = self.list(user_id)?;
        let Some(position) = ids.iter().position(|id| *id == content_id) else {
            return Ok(false);
        };

        ids.remove(position);
        self.persist(user_id, &ids)?;
        debug!(
            "event=bookmark_remove module=repo status=ok user_id={} content_id={} count={}",
            user_id,
            content_id,
            ids.len()
        );
        Ok(true)
    }

    pub fn contains(&self, user_id: UserId, content_id: ContentId) -> StorageResult<bool> {
        Ok(self.list(user_id)?.contains(&content_id))
    }

    /// Returns the sequence oldest-first, or empty when nothing is stored.
    pub fn list(&self, user_id: UserId) -> StorageResult<Vec<ContentId>> {
        let stored = self.storage.get_user_value(user_id, &self.meta_key)?;
        Ok(decode_bookmark_ids(stored))
    }

    pub fn count(&self, user_id: UserId) -> StorageResult<usize> {
        Ok(self.list(user_id)?.len())
    }

    fn persist(&self, user_id: UserId, ids: &[ContentId]) -> StorageResult<()> {
        let value = serde_json::to_value(ids)?;
        self.storage.set_user_value(user_id, &self.meta_key, &value)
    }
}

/// Coerces a stored value into a duplicate-free id sequence.
///
/// Rules:
/// - Missing or non-array values decode to an empty sequence.
/// - Elements may be positive integers or strings holding one; anything else
///   (zero, negatives, floats, objects) is skipped.
/// - Repeated ids keep their first position.
pub fn decode_bookmark_ids(stored: Option<Value>) -> Vec<ContentId> {
    let Some(Value::Array(items)) = stored else {
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter_map(decode_one)
        .filter(|id| seen.insert(*id))
        .collect()
}

fn decode_one(item: &Value) -> Option<ContentId> {
    match item {
        Value::Number(number) => number.as_u64().and_then(ContentId::new),
        Value::String(text) => text.trim().parse::<u64>().ok().and_then(ContentId::new),
        _ => None,
    }
}

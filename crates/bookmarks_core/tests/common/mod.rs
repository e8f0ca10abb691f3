#![allow(dead_code)]

use bookmarks_core::{
    ContentId, ContentItem, ContentLookup, StorageError, StorageResult, UserId, UserMetaStorage,
};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

pub fn user(raw: u64) -> UserId {
    UserId::new(raw).unwrap()
}

pub fn content(raw: u64) -> ContentId {
    ContentId::new(raw).unwrap()
}

pub fn ids(raw: &[u64]) -> Vec<ContentId> {
    raw.iter().map(|value| content(*value)).collect()
}

pub fn post(raw: u64, title: &str, body: &str) -> ContentItem {
    ContentItem {
        id: content(raw),
        title: title.to_string(),
        permalink: format!("https://example.test/?p={raw}"),
        published_at: 1_700_000_000_000 + raw as i64,
        categories: Vec::new(),
        excerpt: None,
        body: body.to_string(),
    }
}

/// Published items keyed by id; anything absent counts as deleted.
#[derive(Default)]
pub struct FixtureCatalog {
    items: RefCell<BTreeMap<ContentId, ContentItem>>,
    lookups: Cell<usize>,
}

impl FixtureCatalog {
    pub fn with_posts(raw_ids: &[u64]) -> Self {
        let catalog = Self::default();
        for raw in raw_ids {
            catalog.insert(post(*raw, &format!("Post {raw}"), &format!("Body of post {raw}")));
        }
        catalog
    }

    pub fn insert(&self, item: ContentItem) {
        self.items.borrow_mut().insert(item.id, item);
    }

    pub fn delete(&self, raw: u64) {
        self.items.borrow_mut().remove(&content(raw));
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ContentLookup for FixtureCatalog {
    fn get_content_by_id(&self, id: ContentId) -> StorageResult<Option<ContentItem>> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.items.borrow().get(&id).cloned())
    }
}

/// Storage spy that records calls and forwards to an inner store.
pub struct RecordingStorage<S> {
    inner: S,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl<S: UserMetaStorage> RecordingStorage<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl<S: UserMetaStorage> UserMetaStorage for RecordingStorage<S> {
    fn get_user_value(&self, user_id: UserId, key: &str) -> StorageResult<Option<Value>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_user_value(user_id, key)
    }

    fn set_user_value(&self, user_id: UserId, key: &str, value: &Value) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set_user_value(user_id, key, value)
    }
}

/// Storage whose every call fails, for propagation checks.
pub struct FailingStorage;

impl UserMetaStorage for FailingStorage {
    fn get_user_value(&self, _user_id: UserId, _key: &str) -> StorageResult<Option<Value>> {
        Err(StorageError::Backend("meta table unavailable".to_string()))
    }

    fn set_user_value(&self, _user_id: UserId, _key: &str, _value: &Value) -> StorageResult<()> {
        Err(StorageError::Backend("meta table unavailable".to_string()))
    }
}

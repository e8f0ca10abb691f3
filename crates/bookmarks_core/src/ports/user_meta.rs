//! Per-user key-value storage contract and its error type.
//!
//! # Invariants
//! - Values are JSON documents; shape validation is the caller's job.
//! - `set_user_value` is last-write-wins. No locking or transactions are
//!   implied across a get/set pair.

use crate::db::DbError;
use crate::model::ids::UserId;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage or lookup collaborator.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Value could not be encoded for persistence.
    Encode(serde_json::Error),
    /// Host backend failure described by the host.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Host-provided per-user key-value storage.
pub trait UserMetaStorage {
    /// Reads one value; `Ok(None)` when the key was never written.
    fn get_user_value(&self, user_id: UserId, key: &str) -> StorageResult<Option<Value>>;
    /// Replaces one value.
    fn set_user_value(&self, user_id: UserId, key: &str, value: &Value) -> StorageResult<()>;
}

impl<T: UserMetaStorage + ?Sized> UserMetaStorage for &T {
    fn get_user_value(&self, user_id: UserId, key: &str) -> StorageResult<Option<Value>> {
        (**self).get_user_value(user_id, key)
    }

    fn set_user_value(&self, user_id: UserId, key: &str, value: &Value) -> StorageResult<()> {
        (**self).set_user_value(user_id, key, value)
    }
}

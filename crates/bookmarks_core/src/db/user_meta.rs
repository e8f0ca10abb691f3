//! SQLite-backed `UserMetaStorage` adapter.
//!
//! # Responsibility
//! - Persist per-user JSON values in the `user_meta` table.
//!
//! # Invariants
//! - Writes are upserts keyed by `(user_id, meta_key)`; last write wins.
//! - Stored text that is not valid JSON is surfaced as a JSON string instead
//!   of failing the read, so callers can apply their own defensive policy.

use crate::model::ids::UserId;
use crate::ports::user_meta::{StorageError, StorageResult, UserMetaStorage};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

/// `UserMetaStorage` over a migrated SQLite connection.
pub struct SqliteUserMetaStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserMetaStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserMetaStorage for SqliteUserMetaStore<'_> {
    fn get_user_value(&self, user_id: UserId, key: &str) -> StorageResult<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT meta_value
                 FROM user_meta
                 WHERE user_id = ?1
                   AND meta_key = ?2;",
                params![user_id_to_db(user_id)?, key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.map(|text| match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => {
                debug!(
                    "event=user_meta_read module=db status=non_json user_id={} key={}",
                    user_id, key
                );
                Value::String(text)
            }
        }))
    }

    fn set_user_value(&self, user_id: UserId, key: &str, value: &Value) -> StorageResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO user_meta (user_id, meta_key, meta_value)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (user_id, meta_key) DO UPDATE SET
                meta_value = excluded.meta_value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![user_id_to_db(user_id)?, key, encoded],
        )?;
        Ok(())
    }
}

fn user_id_to_db(user_id: UserId) -> StorageResult<i64> {
    i64::try_from(user_id.get()).map_err(|_| {
        StorageError::Backend(format!("user id {user_id} exceeds SQLite integer range"))
    })
}

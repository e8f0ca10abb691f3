mod common;

use bookmarks_core::db::open_db_in_memory;
use bookmarks_core::{
    BookmarkStore, SqliteUserMetaStore, StorageError, UserMetaStorage, DEFAULT_META_KEY,
};
use common::{content, ids, user, FailingStorage, RecordingStorage};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn add_is_idempotent_and_reports_insertion() {
    let conn = open_db_in_memory().unwrap();
    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));

    assert!(store.add(user(1), content(10)).unwrap());
    assert!(!store.add(user(1), content(10)).unwrap());

    assert_eq!(store.list(user(1)).unwrap(), ids(&[10]));
    assert_eq!(store.count(user(1)).unwrap(), 1);
}

#[test]
fn list_preserves_insertion_order_and_never_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));

    for raw in [5, 3, 9, 3, 5, 1] {
        store.add(user(1), content(raw)).unwrap();
    }

    let listed = store.list(user(1)).unwrap();
    assert_eq!(listed, ids(&[5, 3, 9, 1]));
    let unique = listed.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), listed.len());
}

#[test]
fn remove_compacts_and_keeps_relative_order() {
    let conn = open_db_in_memory().unwrap();
    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));
    for raw in [1, 2, 3, 4] {
        store.add(user(1), content(raw)).unwrap();
    }

    assert!(store.remove(user(1), content(2)).unwrap());

    assert_eq!(store.list(user(1)).unwrap(), ids(&[1, 3, 4]));
    assert!(!store.contains(user(1), content(2)).unwrap());
    assert!(store.contains(user(1), content(3)).unwrap());

    let stored = SqliteUserMetaStore::new(&conn)
        .get_user_value(user(1), DEFAULT_META_KEY)
        .unwrap();
    assert_eq!(stored, Some(json!([1, 3, 4])));
}

#[test]
fn remove_of_absent_id_returns_false_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let spy = RecordingStorage::new(SqliteUserMetaStore::new(&conn));
    let store = BookmarkStore::new(&spy);
    store.add(user(1), content(1)).unwrap();
    let writes_before = spy.writes();

    assert!(!store.remove(user(1), content(99)).unwrap());
    assert!(!store.add(user(1), content(1)).unwrap());

    assert_eq!(spy.writes(), writes_before);
    assert_eq!(store.list(user(1)).unwrap(), ids(&[1]));
}

#[test]
fn unknown_user_has_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));

    assert!(store.list(user(42)).unwrap().is_empty());
    assert_eq!(store.count(user(42)).unwrap(), 0);
    assert!(!store.contains(user(42), content(1)).unwrap());
}

#[test]
fn users_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));

    store.add(user(1), content(7)).unwrap();
    store.add(user(2), content(8)).unwrap();

    assert_eq!(store.list(user(1)).unwrap(), ids(&[7]));
    assert_eq!(store.list(user(2)).unwrap(), ids(&[8]));
}

#[test]
fn malformed_stored_values_read_as_empty_and_are_replaced_on_add() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    meta.set_user_value(user(1), DEFAULT_META_KEY, &json!({"broken": true}))
        .unwrap();
    conn.execute(
        "INSERT INTO user_meta (user_id, meta_key, meta_value) VALUES (2, ?1, 'not json');",
        [DEFAULT_META_KEY],
    )
    .unwrap();

    let store = BookmarkStore::new(SqliteUserMetaStore::new(&conn));
    assert!(store.list(user(1)).unwrap().is_empty());
    assert!(store.list(user(2)).unwrap().is_empty());
    assert!(!store.remove(user(1), content(3)).unwrap());

    assert!(store.add(user(1), content(3)).unwrap());
    assert_eq!(
        meta.get_user_value(user(1), DEFAULT_META_KEY).unwrap(),
        Some(json!([3]))
    );
}

#[test]
fn custom_meta_key_does_not_touch_default_key() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    let store = BookmarkStore::with_meta_key(&meta, "reading_list");

    store.add(user(1), content(4)).unwrap();

    assert_eq!(store.meta_key(), "reading_list");
    assert_eq!(meta.get_user_value(user(1), DEFAULT_META_KEY).unwrap(), None);
    assert_eq!(
        meta.get_user_value(user(1), "reading_list").unwrap(),
        Some(json!([4]))
    );
}

#[test]
fn storage_failures_propagate() {
    let store = BookmarkStore::new(FailingStorage);

    let err = store.add(user(1), content(1)).unwrap_err();
    assert!(matches!(err, StorageError::Backend(_)));
    assert!(store.list(user(1)).is_err());
}

mod common;

use bookmarks_core::db::open_db_in_memory;
use bookmarks_core::{
    BookmarkError, BookmarkListRenderer, BookmarkListView, BookmarkService, BookmarkStore,
    ButtonIcon, ButtonOptions, ButtonState, IdentityProvider, ListOptions, SqliteUserMetaStore,
    StaticIdentity, StorageError, UserId,
};
use common::{content, ids, user, FailingStorage, FixtureCatalog, RecordingStorage};

#[test]
fn toggle_twice_restores_membership_and_count() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    let catalog = FixtureCatalog::with_posts(&[1, 2]);
    let service = BookmarkService::new(
        BookmarkStore::new(&meta),
        &catalog,
        StaticIdentity::authenticated(user(1)),
    );
    service.toggle(content(1)).unwrap();
    let before = service.count_of(None).unwrap();

    let first = service.toggle(content(2)).unwrap();
    assert!(first.bookmarked);
    assert_eq!(first.count, before + 1);

    let second = service.toggle(content(2)).unwrap();
    assert!(!second.bookmarked);
    assert_eq!(second.count, before);
    assert!(!service.is_bookmarked(content(2)).unwrap());
    assert_eq!(service.bookmarks_of(None).unwrap(), ids(&[1]));
}

#[test]
fn unauthenticated_toggle_is_rejected_without_storage_access() {
    let conn = open_db_in_memory().unwrap();
    let spy = RecordingStorage::new(SqliteUserMetaStore::new(&conn));
    let catalog = FixtureCatalog::with_posts(&[1]);
    let service = BookmarkService::new(
        BookmarkStore::new(&spy),
        &catalog,
        StaticIdentity::anonymous(),
    );

    let err = service.toggle(content(1)).unwrap_err();
    assert!(matches!(err, BookmarkError::Unauthorized));

    let err = service.remove_only(content(1)).unwrap_err();
    assert!(matches!(err, BookmarkError::Unauthorized));

    assert_eq!(spy.writes(), 0);
    assert_eq!(spy.reads(), 0);
    assert_eq!(catalog.lookups(), 0);
}

#[test]
fn user_id_without_authentication_is_unauthorized() {
    struct StaleSession;

    impl IdentityProvider for StaleSession {
        fn current_user_id(&self) -> Option<UserId> {
            UserId::new(5)
        }

        fn is_authenticated(&self) -> bool {
            false
        }
    }

    let conn = open_db_in_memory().unwrap();
    let catalog = FixtureCatalog::with_posts(&[1]);
    let service = BookmarkService::new(
        BookmarkStore::new(SqliteUserMetaStore::new(&conn)),
        &catalog,
        StaleSession,
    );

    assert!(matches!(
        service.toggle(content(1)).unwrap_err(),
        BookmarkError::Unauthorized
    ));
    assert!(!service.is_bookmarked(content(1)).unwrap());
}

#[test]
fn toggle_of_missing_content_is_invalid_target_and_does_not_write() {
    let conn = open_db_in_memory().unwrap();
    let spy = RecordingStorage::new(SqliteUserMetaStore::new(&conn));
    let catalog = FixtureCatalog::with_posts(&[1]);
    let service = BookmarkService::new(
        BookmarkStore::new(&spy),
        &catalog,
        StaticIdentity::authenticated(user(1)),
    );

    let err = service.toggle(content(404)).unwrap_err();
    assert!(matches!(err, BookmarkError::InvalidTarget(id) if id == content(404)));
    assert_eq!(spy.writes(), 0);
}

#[test]
fn remove_only_cleans_up_references_to_deleted_content() {
    let conn = open_db_in_memory().unwrap();
    let catalog = FixtureCatalog::with_posts(&[1, 2]);
    let service = BookmarkService::new(
        BookmarkStore::new(SqliteUserMetaStore::new(&conn)),
        &catalog,
        StaticIdentity::authenticated(user(1)),
    );
    service.toggle(content(1)).unwrap();
    service.toggle(content(2)).unwrap();
    catalog.delete(2);

    let outcome = service.remove_only(content(2)).unwrap();
    assert_eq!(outcome.count, 1);

    let again = service.remove_only(content(2)).unwrap();
    assert_eq!(again.count, 1);
    assert_eq!(service.bookmarks_of(None).unwrap(), ids(&[1]));
}

#[test]
fn bookmark_then_view_then_remove_scenario() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    let catalog = FixtureCatalog::with_posts(&[1, 2, 3]);
    let identity = StaticIdentity::authenticated(user(1));
    let service = BookmarkService::new(BookmarkStore::new(&meta), &catalog, identity);
    let renderer = BookmarkListRenderer::new(BookmarkStore::new(&meta), &catalog, identity);

    for raw in [1, 2, 3] {
        assert!(service.toggle(content(raw)).unwrap().bookmarked);
    }
    assert_eq!(service.store().list(user(1)).unwrap(), ids(&[1, 2, 3]));

    let options = ListOptions {
        limit: 0,
        ..ListOptions::default()
    };
    let BookmarkListView::List(view) = renderer.build_view(&options).unwrap() else {
        panic!("expected list view");
    };
    let shown = view.items.iter().map(|item| item.content_id).collect::<Vec<_>>();
    assert_eq!(shown, ids(&[3, 2, 1]));

    service.remove_only(content(2)).unwrap();
    assert_eq!(service.store().list(user(1)).unwrap(), ids(&[1, 3]));
}

#[test]
fn helper_lookups_fall_back_to_current_user() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    BookmarkStore::new(&meta).add(user(2), content(9)).unwrap();
    let catalog = FixtureCatalog::with_posts(&[1, 9]);

    let signed_in = BookmarkService::new(
        BookmarkStore::new(&meta),
        &catalog,
        StaticIdentity::authenticated(user(2)),
    );
    assert_eq!(signed_in.bookmarks_of(None).unwrap(), ids(&[9]));
    assert!(signed_in.is_bookmarked_by(content(9), None).unwrap());
    assert_eq!(signed_in.count_of(Some(user(3))).unwrap(), 0);

    let anonymous = BookmarkService::new(
        BookmarkStore::new(&meta),
        &catalog,
        StaticIdentity::anonymous(),
    );
    assert!(anonymous.bookmarks_of(None).unwrap().is_empty());
    assert_eq!(anonymous.count_of(None).unwrap(), 0);
    assert!(!anonymous.is_bookmarked(content(9)).unwrap());
    assert!(anonymous.is_bookmarked_by(content(9), Some(user(2))).unwrap());
    assert_eq!(anonymous.count_of(Some(user(2))).unwrap(), 1);
}

#[test]
fn button_reflects_membership_for_current_user_only() {
    let conn = open_db_in_memory().unwrap();
    let meta = SqliteUserMetaStore::new(&conn);
    BookmarkStore::new(&meta).add(user(1), content(5)).unwrap();
    let catalog = FixtureCatalog::with_posts(&[5]);
    let options = ButtonOptions::default();

    let owner = BookmarkService::new(
        BookmarkStore::new(&meta),
        &catalog,
        StaticIdentity::authenticated(user(1)),
    );
    let view = owner.button(content(5), &options).unwrap();
    assert_eq!(view.css_state, ButtonState::Bookmarked);
    assert_eq!(view.icon, ButtonIcon::Filled);
    assert_eq!(view.label, "Bookmarked");

    let guest = BookmarkService::new(
        BookmarkStore::new(&meta),
        &catalog,
        StaticIdentity::anonymous(),
    );
    let view = guest.button(content(5), &options).unwrap();
    assert_eq!(view.css_state, ButtonState::Default);
    assert_eq!(view.label, "Bookmark");
}

#[test]
fn storage_failures_propagate_as_storage_errors() {
    let catalog = FixtureCatalog::with_posts(&[1]);
    let service = BookmarkService::new(
        BookmarkStore::new(FailingStorage),
        &catalog,
        StaticIdentity::authenticated(user(1)),
    );

    let err = service.toggle(content(1)).unwrap_err();
    assert!(matches!(err, BookmarkError::Storage(StorageError::Backend(_))));
    assert!(service.is_bookmarked(content(1)).is_err());
}

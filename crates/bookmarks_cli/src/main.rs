//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `bookmarks_core` linkage and wiring without a host system.
//! - Keep output deterministic for quick local sanity checks.
//! - Write rolling logs when `BOOKMARKS_LOG_DIR` names an absolute directory.

use bookmarks_core::db::open_db_in_memory;
use bookmarks_core::{
    BookmarkConfig, ContentId, ContentItem, ContentLookup, SqliteUserMetaStore, StaticIdentity,
    StorageResult, UserId,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "BOOKMARKS_LOG_DIR";

/// Three fixed items standing in for a host content store.
struct DemoCatalog;

impl ContentLookup for DemoCatalog {
    fn get_content_by_id(&self, id: ContentId) -> StorageResult<Option<ContentItem>> {
        let title = match id.get() {
            1 => "Getting started",
            2 => "Release notes",
            3 => "Deep dive",
            _ => return Ok(None),
        };
        Ok(Some(ContentItem {
            id,
            title: title.to_string(),
            permalink: format!("/?p={id}"),
            published_at: 0,
            categories: vec!["Demo".to_string()],
            excerpt: None,
            body: format!("{title} body text for the smoke run."),
        }))
    }
}

fn main() -> ExitCode {
    println!("bookmarks_core ping={}", bookmarks_core::ping());
    println!("bookmarks_core version={}", bookmarks_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        match bookmarks_core::init_logging(bookmarks_core::default_log_level(), &log_dir) {
            Ok(()) => println!("logging dir={log_dir}"),
            Err(err) => eprintln!("logging disabled: {err}"),
        }
    }

    match run_smoke() {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("bookmarks smoke failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_smoke() -> Result<String, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let meta = SqliteUserMetaStore::new(&conn);
    let identity = UserId::new(1)
        .map(StaticIdentity::authenticated)
        .ok_or("demo user id must be non-zero")?;
    let config = BookmarkConfig::default();
    let service = config.service(&meta, DemoCatalog, identity);
    let renderer = config.renderer(&meta, DemoCatalog, identity);

    for raw in [1, 2, 3] {
        let content_id = ContentId::new(raw).ok_or("demo content id must be non-zero")?;
        let outcome = service.toggle(content_id)?;
        println!(
            "toggle content_id={content_id} bookmarked={} count={}",
            outcome.bookmarked, outcome.count
        );
    }

    let view = renderer.build_view(&config.list)?;
    Ok(serde_json::to_string_pretty(&view)?)
}

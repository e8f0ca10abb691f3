//! Use-case handlers for transport-facing bookmark calls.
//!
//! # Responsibility
//! - Verify request tokens and authentication before any core call.
//! - Turn raw request fields into typed core inputs.
//! - Map core results to JSON envelopes with fixed user-facing messages.
//!
//! # Invariants
//! - Check order is token, authentication, content id, core call.
//! - Handlers never panic; storage details stay in logs.
//! - Each handled call logs one outcome event tagged with a fresh
//!   `request_id`.

use crate::envelope::{ActionResponse, Failure};
use crate::params::{parse_button_options, parse_list_options, Attributes};
use bookmarks_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BookmarkConfig, BookmarkError, BookmarkListRenderer, BookmarkListView, BookmarkService,
    ButtonView, ContentId, ContentLookup, IdentityProvider, RemoveOutcome, RequestTokenVerifier,
    StorageResult, ToggleOutcome, UserMetaStorage, BOOKMARK_TOKEN_SCOPE,
};
use log::{error, info, warn};
use serde::Deserialize;
use uuid::Uuid;

/// Health check for host smoke integration.
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
///
/// Repeat calls with the same settings are no-ops. Returns an empty string on
/// success and the error message on failure.
pub fn init_logging(level: &str, log_dir: &str) -> String {
    match init_logging_inner(level, log_dir) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Raw fields of a toggle/remove request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub nonce: String,
}

/// Boundary facade wiring core components to their collaborators.
pub struct BookmarkApi<M, C, I, V>
where
    M: UserMetaStorage + Clone,
    C: ContentLookup + Clone,
    I: IdentityProvider + Clone,
    V: RequestTokenVerifier,
{
    config: BookmarkConfig,
    service: BookmarkService<M, C, I>,
    renderer: BookmarkListRenderer<M, C, I>,
    identity: I,
    verifier: V,
}

impl<M, C, I, V> BookmarkApi<M, C, I, V>
where
    M: UserMetaStorage + Clone,
    C: ContentLookup + Clone,
    I: IdentityProvider + Clone,
    V: RequestTokenVerifier,
{
    pub fn new(config: BookmarkConfig, storage: M, content: C, identity: I, verifier: V) -> Self {
        let service = config.service(storage.clone(), content.clone(), identity.clone());
        let renderer = config.renderer(storage, content, identity.clone());
        Self {
            config,
            service,
            renderer,
            identity,
            verifier,
        }
    }

    pub fn service(&self) -> &BookmarkService<M, C, I> {
        &self.service
    }

    /// Toggles a bookmark for the authenticated caller.
    ///
    /// # Contract
    /// - Success data: `{bookmarked, count}`.
    /// - Not idempotent; clients must disable the trigger while a call is in
    ///   flight.
    pub fn handle_toggle(&self, request: &ActionRequest) -> ActionResponse<ToggleOutcome> {
        let request_id = Uuid::new_v4();
        let content_id = match self.admit(request, Failure::LoginToBookmark) {
            Ok(content_id) => content_id,
            Err(failure) => return reject("toggle", request_id, failure),
        };

        match self.service.toggle(content_id) {
            Ok(outcome) => {
                info!(
                    "event=api_toggle module=api status=ok request_id={} content_id={} bookmarked={} count={}",
                    request_id, content_id, outcome.bookmarked, outcome.count
                );
                ActionResponse::success(outcome)
            }
            Err(err) => reject(
                "toggle",
                request_id,
                map_error(request_id, &err, Failure::LoginToBookmark),
            ),
        }
    }

    /// Entry point for callers the host already knows are anonymous.
    pub fn handle_toggle_guest(&self) -> ActionResponse<ToggleOutcome> {
        reject("toggle_guest", Uuid::new_v4(), Failure::LoginToBookmark)
    }

    /// Removes a bookmark without checking that the content still exists.
    ///
    /// # Contract
    /// - Success data: `{count}`.
    /// - Removing an id that is not bookmarked succeeds with the current count.
    pub fn handle_remove(&self, request: &ActionRequest) -> ActionResponse<RemoveOutcome> {
        let request_id = Uuid::new_v4();
        let content_id = match self.admit(request, Failure::LoginRequired) {
            Ok(content_id) => content_id,
            Err(failure) => return reject("remove", request_id, failure),
        };

        match self.service.remove_only(content_id) {
            Ok(outcome) => {
                info!(
                    "event=api_remove module=api status=ok request_id={} content_id={} count={}",
                    request_id, content_id, outcome.count
                );
                ActionResponse::success(outcome)
            }
            Err(err) => reject(
                "remove",
                request_id,
                map_error(request_id, &err, Failure::LoginRequired),
            ),
        }
    }

    /// Builds the list view from template attributes.
    pub fn render_list(&self, attrs: &Attributes) -> StorageResult<BookmarkListView> {
        let options = parse_list_options(attrs, &self.config.list);
        self.renderer.build_view(&options)
    }

    /// Builds the button view from template attributes.
    ///
    /// Returns `Ok(None)` when no usable content id is available.
    pub fn render_button(
        &self,
        attrs: &Attributes,
        current: Option<ContentId>,
    ) -> StorageResult<Option<ButtonView>> {
        let request = parse_button_options(attrs, &self.config.button, current);
        match request.content_id {
            Some(content_id) => self.service.button(content_id, &request.options).map(Some),
            None => Ok(None),
        }
    }

    fn admit(&self, request: &ActionRequest, unauthorized: Failure) -> Result<ContentId, Failure> {
        if !self.verifier.verify(&request.nonce, BOOKMARK_TOKEN_SCOPE) {
            return Err(Failure::SecurityCheck);
        }
        if self.identity.authenticated_user().is_none() {
            return Err(unauthorized);
        }
        ContentId::parse_loose(&request.post_id).ok_or(Failure::InvalidPost)
    }
}

fn map_error(request_id: Uuid, err: &BookmarkError, unauthorized: Failure) -> Failure {
    match err {
        BookmarkError::Unauthorized => unauthorized,
        BookmarkError::InvalidTarget(_) => Failure::InvalidPost,
        BookmarkError::Storage(storage) => {
            error!(
                "event=api_storage_failure module=api status=error request_id={} error={}",
                request_id, storage
            );
            Failure::Storage
        }
    }
}

fn reject<T: serde::Serialize>(
    operation: &'static str,
    request_id: Uuid,
    failure: Failure,
) -> ActionResponse<T> {
    warn!(
        "event=api_{} module=api status=rejected request_id={} reason={}",
        operation,
        request_id,
        failure.code()
    );
    ActionResponse::failure(failure)
}

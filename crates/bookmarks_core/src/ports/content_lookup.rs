//! Content lookup collaborator contract.

use crate::model::content::ContentItem;
use crate::model::ids::ContentId;
use crate::ports::user_meta::StorageResult;

/// Resolves content ids against the host content store.
///
/// # Contract
/// - Returns `Ok(None)` for ids that do not exist or are not published.
/// - Returns `Err` only for backend failures; those propagate to callers.
pub trait ContentLookup {
    fn get_content_by_id(&self, id: ContentId) -> StorageResult<Option<ContentItem>>;
}

impl<T: ContentLookup + ?Sized> ContentLookup for &T {
    fn get_content_by_id(&self, id: ContentId) -> StorageResult<Option<ContentItem>> {
        (**self).get_content_by_id(id)
    }
}

use async_trait::async_trait;

use crate::error::TagResult;
use crate::models::Tag;

/// Store boundary for tag records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Insert a new tag. The store assigns `_id`, stamps the timestamps,
    /// and enforces name uniqueness.
    async fn insert(&self, tag: Tag) -> TagResult<Tag>;

    /// Tag with the given name, or `None`
    async fn find_by_name(&self, name: &str) -> TagResult<Option<Tag>>;

    /// All tags, newest first
    async fn list(&self) -> TagResult<Vec<Tag>>;
}

//! Tag service - thin access layer over the tag store

use std::sync::Arc;
use tracing::instrument;

use crate::error::TagResult;
use crate::models::{CreateTag, Tag};
use crate::repository::TagRepository;

pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new tag. A duplicate name surfaces as
    /// [`TagError::DuplicateName`](crate::error::TagError::DuplicateName)
    /// from the store's unique index.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateTag) -> TagResult<Tag> {
        self.repository.insert(Tag::new(input.name)).await
    }

    /// Tag with the given name; absence is `Ok(None)`, never an error
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> TagResult<Option<Tag>> {
        self.repository.find_by_name(name).await
    }

    /// All tags, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> TagResult<Vec<Tag>> {
        self.repository.list().await
    }

    /// True iff a tag with the given name is stored
    #[instrument(skip(self))]
    pub async fn exists(&self, name: &str) -> TagResult<bool> {
        let tag = self.repository.find_by_name(name).await?;
        Ok(tag.is_some_and(|t| t.id.is_some()))
    }
}

impl<R: TagRepository> Clone for TagService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

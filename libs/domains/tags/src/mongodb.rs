//! MongoDB implementation of TagRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_document, DateTime, Document};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::{TagError, TagResult};
use crate::models::Tag;
use crate::repository::TagRepository;
use crate::schema::TAG_SCHEMA;

/// MongoDB implementation of the tag store; the database handle is injected
/// by the caller.
pub struct MongoTagRepository {
    db: Database,
    collection: Collection<Tag>,
}

impl MongoTagRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Tag>(TAG_SCHEMA.collection());
        Self { db, collection }
    }

    /// Create the unique name index. Call once at startup.
    pub async fn create_indexes(&self) -> TagResult<()> {
        TAG_SCHEMA.ensure_indexes(&self.db).await?;
        Ok(())
    }
}

/// Duplicate-key write failures (code 11000) signal a uniqueness violation
fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl TagRepository for MongoTagRepository {
    #[instrument(skip(self, tag), fields(name = %tag.name))]
    async fn insert(&self, mut tag: Tag) -> TagResult<Tag> {
        let now = DateTime::now();
        tag.id = None;
        tag.created_at = now;
        tag.updated_at = now;

        let mut document = to_document(&tag)?;
        TAG_SCHEMA.apply_defaults(&mut document);
        TAG_SCHEMA.check_required(&document)?;

        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(document)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    TagError::DuplicateName(tag.name.clone())
                } else {
                    TagError::Database(e.to_string())
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| TagError::Database("store did not assign an ObjectId".to_string()))?;
        tag.id = Some(id);

        tracing::info!(tag_id = %id, "Tag created");
        Ok(tag)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> TagResult<Option<Tag>> {
        let tag = self.collection.find_one(doc! { "name": name }).await?;
        Ok(tag)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> TagResult<Vec<Tag>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let tags: Vec<Tag> = cursor.try_collect().await?;
        Ok(tags)
    }
}

//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::bson::{doc, to_bson, to_document, Bson, DateTime, Document};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserCriteria};
use crate::repository::UserRepository;
use crate::schema::USER_SCHEMA;

/// MongoDB implementation of the user store.
///
/// The database handle is constructed by the caller and injected here;
/// nothing in this crate holds global connection state.
pub struct MongoUserRepository {
    db: Database,
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("talentpool"));
    /// repo.create_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<User>(USER_SCHEMA.collection());
        Self { db, collection }
    }

    /// Create the unique indexes the user schema declares (email).
    /// Call once at startup, before serving traffic.
    pub async fn create_indexes(&self) -> UserResult<()> {
        USER_SCHEMA.ensure_indexes(&self.db).await?;
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    /// Build a MongoDB filter document from the criteria: one equality
    /// clause per set field, under the stored field names.
    fn build_filter(criteria: &UserCriteria) -> Document {
        let mut filter = doc! {};

        if let Some(id) = criteria.id {
            filter.insert("_id", id);
        }
        if let Some(ref firstname) = criteria.firstname {
            filter.insert("firstname", firstname);
        }
        if let Some(ref lastname) = criteria.lastname {
            filter.insert("lastname", lastname);
        }
        if let Some(ref nickname) = criteria.nickname {
            filter.insert("nickname", nickname);
        }
        if let Some(ref email) = criteria.email {
            filter.insert("email", email);
        }
        if let Some(ref phone) = criteria.phone {
            filter.insert("phone", phone);
        }
        if let Some(email_verified) = criteria.email_verified {
            filter.insert("email_verified", email_verified);
        }
        if let Some(phone_verified) = criteria.phone_verified {
            filter.insert("phone_verified", phone_verified);
        }
        if let Some(ref role) = criteria.role {
            // Equality on an array field matches documents holding the value
            filter.insert("role", to_bson(role).unwrap_or(Bson::Null));
        }
        if let Some(ref status) = criteria.status {
            filter.insert("status", to_bson(status).unwrap_or(Bson::Null));
        }
        if let Some(ref v_token) = criteria.v_token {
            filter.insert("vToken", v_token);
        }
        if let Some(ref v_code) = criteria.v_code {
            filter.insert("vCode", v_code);
        }

        filter
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
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, criteria))]
    async fn find_one(&self, criteria: UserCriteria) -> UserResult<Option<User>> {
        let filter = Self::build_filter(&criteria);
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, mut user: User) -> UserResult<User> {
        // Store-layer stamping: id comes back from the insert, timestamps
        // are set here
        let now = DateTime::now();
        user.id = None;
        user.created_at = now;
        user.updated_at = now;

        let mut document = to_document(&user)?;
        USER_SCHEMA.apply_defaults(&mut document);
        USER_SCHEMA.check_required(&document)?;

        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(document)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    UserError::DuplicateEmail(user.email.clone())
                } else {
                    UserError::Database(e.to_string())
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| UserError::Database("store did not assign an ObjectId".to_string()))?;
        user.id = Some(id);

        tracing::info!(user_id = %id, "User record created");
        Ok(user)
    }
}

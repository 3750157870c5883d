use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    /// Uniqueness violation on the tag name index
    #[error("Tag with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TagResult<T> = Result<T, TagError>;

impl From<mongodb::error::Error> for TagError {
    fn from(err: mongodb::error::Error) -> Self {
        TagError::Database(err.to_string())
    }
}

impl From<database::mongodb::MongoError> for TagError {
    fn from(err: database::mongodb::MongoError) -> Self {
        TagError::Database(err.to_string())
    }
}

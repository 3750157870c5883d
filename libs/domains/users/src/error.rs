use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Uniqueness violation on the email index; propagated from the store,
    /// never retried here
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<database::mongodb::MongoError> for UserError {
    fn from(err: database::mongodb::MongoError) -> Self {
        UserError::Database(err.to_string())
    }
}

//! User access service - the logic-bearing component of the users domain

use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{CreateUser, User, UserCriteria};
use crate::password;
use crate::repository::UserRepository;
use crate::token;

/// Access operations over the user record store.
///
/// Constructed with an injected repository; holds no other state. Input
/// validation is the calling layer's job, and every operation is a single
/// store round trip with no retries.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// First record matching the criteria. Absence is `Ok(None)`, never an
    /// error.
    #[instrument(skip(self, criteria))]
    pub async fn find_by_attrs(&self, criteria: UserCriteria) -> UserResult<Option<User>> {
        self.repository.find_one(criteria).await
    }

    /// Register a new user record.
    ///
    /// Generates a fresh verification token and code on every call, hashes
    /// the plaintext password, assembles a guest record, and issues one
    /// insert. A duplicate email surfaces as
    /// [`UserError::DuplicateEmail`](crate::error::UserError::DuplicateEmail)
    /// straight from the store's unique index.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        let v_token = token::create_token()?;
        let v_code = token::create_code(token::VERIFICATION_CODE_LENGTH);
        let password_hash = password::hash_password(&input.password)?;

        let user = User::new(input.email, password_hash, v_token, v_code);
        self.repository.insert(user).await
    }

    /// True iff a record matching the criteria carries a store-assigned id.
    /// A thin wrapper over [`find_by_attrs`](Self::find_by_attrs) that
    /// discards the record.
    #[instrument(skip(self, criteria))]
    pub async fn exists(&self, criteria: UserCriteria) -> UserResult<bool> {
        let user = self.repository.find_one(criteria).await?;
        Ok(user.is_some_and(|u| u.id.is_some()))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

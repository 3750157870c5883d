use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserCriteria};

/// Store boundary for user records. Deliberately narrow: the access service
/// needs exactly a single-document lookup and an insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// First record matching the criteria, or `None`. Absence is not an
    /// error.
    async fn find_one(&self, criteria: UserCriteria) -> UserResult<Option<User>>;

    /// Insert a new record. The store assigns `_id`, stamps the timestamps,
    /// and enforces email uniqueness.
    async fn insert(&self, user: User) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for tests and local
/// development). Mirrors the store semantics: exact-equality matching,
/// unique email, assigned ObjectId, stamped timestamps.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_one(&self, criteria: UserCriteria) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| criteria.matches(u)).cloned())
    }

    async fn insert(&self, mut user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        let id = ObjectId::new();
        let now = bson::DateTime::now();
        user.id = Some(id);
        user.created_at = now;
        user.updated_at = now;

        users.insert(id, user.clone());

        tracing::info!(user_id = %id, email = %user.email, "Created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> User {
        User::new(
            email.to_string(),
            "hash".to_string(),
            "token".to_string(),
            "123456".to_string(),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let repo = InMemoryUserRepository::new();

        let created = repo.insert(new_user("test@example.com")).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_find_one_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("test@example.com")).await.unwrap();

        let criteria = UserCriteria {
            email: Some("test@example.com".to_string()),
            ..Default::default()
        };
        let found = repo.find_one(criteria).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "test@example.com");
    }

    #[tokio::test]
    async fn test_find_one_absent_is_none_not_error() {
        let repo = InMemoryUserRepository::new();

        let criteria = UserCriteria {
            email: Some("nobody@example.com".to_string()),
            ..Default::default()
        };
        assert!(repo.find_one(criteria).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_error() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("test@example.com")).await.unwrap();
        let result = repo.insert(new_user("test@example.com")).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_find_one_by_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(new_user("a@x.com")).await.unwrap();

        let criteria = UserCriteria {
            id: created.id,
            ..Default::default()
        };
        let found = repo.find_one(criteria).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }
}

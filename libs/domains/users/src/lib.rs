//! Users Domain
//!
//! User identity records and the access service of the talent pool platform:
//! lookup by arbitrary field criteria, registration with verification
//! provisioning, and existence checks, backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← access operations (find / create / exists)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← store boundary (trait + MongoDB / in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, criteria, public projection
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{CreateUser, MongoUserRepository, PublicUser, UserService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("talentpool");
//!
//! // The store handle is constructed here and injected; nothing is global.
//! let repository = MongoUserRepository::new(db);
//! repository.create_indexes().await?;
//!
//! let service = UserService::new(repository);
//! let user = service
//!     .create(CreateUser {
//!         email: "john@example.com".to_string(),
//!         password: "plaintext".to_string(),
//!     })
//!     .await?;
//!
//! // Secrets never cross this boundary.
//! let view = PublicUser::from(&user);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod repository;
pub mod schema;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{
    to_public_view, CreateUser, PublicUser, User, UserCriteria, UserRole, UserStatus,
};
pub use mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use schema::USER_SCHEMA;
pub use service::UserService;

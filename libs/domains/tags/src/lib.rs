//! Tags Domain
//!
//! Named tags of the talent pool platform (sports, disciplines, interests).
//! Users reference tags by name through their `favorites` list; there is no
//! further relationship modeling. Same layering as the users domain:
//! service over a repository trait with a MongoDB implementation.

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use error::{TagError, TagResult};
pub use models::{CreateTag, Tag};
pub use mongodb::MongoTagRepository;
pub use repository::TagRepository;
pub use schema::TAG_SCHEMA;
pub use service::TagService;

//! MongoDB database connector and utilities
//!
//! Provides connection management, health checks, and the document-schema
//! mapping layer the domain crates build their repositories on.

mod config;
mod connector;
mod health;
pub mod schema;

pub use config::MongoConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry, MongoError,
};
pub use health::{check_health, check_health_detailed, HealthStatus};
pub use schema::{DocumentSchema, FieldKind, FieldSpec};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};

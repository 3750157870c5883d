//! Database library providing the MongoDB connector and document-schema
//! utilities shared by the domain crates.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks, and the
//!   document schema mapping layer
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("talentpool");
//! let collection = db.collection::<Document>("users");
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

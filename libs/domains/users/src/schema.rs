//! Schema description of the `users` collection.
//!
//! The flags mirror the store contract: `email` is the one unique field,
//! `password`/`vToken`/`vCode` never leave the store boundary, and every
//! optional field carries the default the store applies when it is absent.

use database::mongodb::schema::{DocumentSchema, FieldKind, FieldSpec};
use mongodb::bson::Bson;
use once_cell::sync::Lazy;

pub static USER_SCHEMA: Lazy<DocumentSchema> = Lazy::new(|| {
    DocumentSchema::new(
        "users",
        vec![
            FieldSpec::new("firstname", FieldKind::String).with_default(""),
            FieldSpec::new("lastname", FieldKind::String).with_default(""),
            FieldSpec::new("nickname", FieldKind::String).with_default(""),
            FieldSpec::new("email", FieldKind::String).required().unique(),
            FieldSpec::new("email_verified", FieldKind::Bool).with_default(false),
            FieldSpec::new("vToken", FieldKind::String).hidden(),
            FieldSpec::new("vCode", FieldKind::String).hidden(),
            FieldSpec::new("phone", FieldKind::String).with_default(""),
            FieldSpec::new("photo", FieldKind::String).with_default(""),
            FieldSpec::new("phone_verified", FieldKind::Bool).with_default(false),
            FieldSpec::new("role", FieldKind::StringArray)
                .required()
                .with_default(Bson::Array(vec!["guest".into()])),
            FieldSpec::new("password", FieldKind::String).required().hidden(),
            FieldSpec::new("favorites", FieldKind::StringArray)
                .with_default(Bson::Array(vec![])),
            FieldSpec::new("status", FieldKind::String).with_default("I"),
            FieldSpec::new("created_at", FieldKind::DateTime),
            FieldSpec::new("updated_at", FieldKind::DateTime),
        ],
    )
});

//! Explicit document-schema descriptions.
//!
//! Collections are described by a [`DocumentSchema`]: a plain list of
//! [`FieldSpec`]s carrying the semantic kind, default value, and
//! required/unique/hidden flags of each field. The repositories consume the
//! description generically (index creation, insert-time defaults, required
//! checks); domain crates declare one static schema per collection and keep
//! their entity structs free of persistence concerns.

use mongodb::bson::{Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use tracing::info;

use super::MongoError;

/// Semantic type of a document field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ObjectId,
    String,
    Bool,
    StringArray,
    DateTime,
}

/// Description of a single document field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present and non-null when a document is written
    pub required: bool,
    /// Enforced by a unique index on the collection
    pub unique: bool,
    /// Never included in any external representation of the record
    pub hidden: bool,
    /// Value filled in when the field is missing from a written document
    pub default: Option<Bson>,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            unique: false,
            hidden: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Bson>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Schema description for one collection
#[derive(Debug, Clone)]
pub struct DocumentSchema {
    collection: &'static str,
    fields: Vec<FieldSpec>,
}

impl DocumentSchema {
    pub fn new(collection: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { collection, fields }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of fields that must never leave the store boundary
    pub fn hidden_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.hidden).map(|f| f.name)
    }

    /// Names of fields backed by a unique index
    pub fn unique_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.unique).map(|f| f.name)
    }

    /// Reject a document that is missing (or nulls out) a required field
    pub fn check_required(&self, document: &Document) -> Result<(), MongoError> {
        for field in self.fields.iter().filter(|f| f.required) {
            match document.get(field.name) {
                None | Some(Bson::Null) => {
                    return Err(MongoError::SchemaViolation(format!(
                        "collection '{}': required field '{}' is missing",
                        self.collection, field.name
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Fill missing fields with their declared defaults
    pub fn apply_defaults(&self, document: &mut Document) {
        for field in &self.fields {
            if let Some(ref default) = field.default {
                match document.get(field.name) {
                    None | Some(Bson::Null) => {
                        document.insert(field.name, default.clone());
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// Create a unique index for every `unique` field of the collection.
    ///
    /// Safe to call repeatedly; index creation is idempotent on the server.
    pub async fn ensure_indexes(&self, db: &Database) -> Result<(), MongoError> {
        let collection = db.collection::<Document>(self.collection);

        for name in self.unique_fields() {
            let mut keys = Document::new();
            keys.insert(name, 1);

            let model = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build();

            collection.create_index(model).await?;
            info!(collection = self.collection, field = name, "Unique index ensured");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn sample_schema() -> DocumentSchema {
        DocumentSchema::new(
            "samples",
            vec![
                FieldSpec::new("email", FieldKind::String).required().unique(),
                FieldSpec::new("secret", FieldKind::String).hidden(),
                FieldSpec::new("active", FieldKind::Bool).with_default(false),
                FieldSpec::new("labels", FieldKind::StringArray)
                    .with_default(Bson::Array(vec![])),
            ],
        )
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        assert!(schema.field("email").is_some());
        assert!(schema.field("unknown").is_none());
        assert_eq!(schema.collection(), "samples");
    }

    #[test]
    fn test_hidden_and_unique_fields() {
        let schema = sample_schema();
        let hidden: Vec<_> = schema.hidden_fields().collect();
        assert_eq!(hidden, vec!["secret"]);

        let unique: Vec<_> = schema.unique_fields().collect();
        assert_eq!(unique, vec!["email"]);
    }

    #[test]
    fn test_check_required_accepts_complete_document() {
        let schema = sample_schema();
        let document = doc! { "email": "a@x.com" };
        assert!(schema.check_required(&document).is_ok());
    }

    #[test]
    fn test_check_required_rejects_missing_field() {
        let schema = sample_schema();
        let document = doc! { "active": true };
        let err = schema.check_required(&document).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_check_required_rejects_null_field() {
        let schema = sample_schema();
        let document = doc! { "email": Bson::Null };
        assert!(schema.check_required(&document).is_err());
    }

    #[test]
    fn test_apply_defaults_fills_missing() {
        let schema = sample_schema();
        let mut document = doc! { "email": "a@x.com" };
        schema.apply_defaults(&mut document);

        assert_eq!(document.get_bool("active").unwrap(), false);
        assert!(document.get_array("labels").unwrap().is_empty());
    }

    #[test]
    fn test_apply_defaults_keeps_existing_values() {
        let schema = sample_schema();
        let mut document = doc! { "email": "a@x.com", "active": true };
        schema.apply_defaults(&mut document);

        assert_eq!(document.get_bool("active").unwrap(), true);
    }
}

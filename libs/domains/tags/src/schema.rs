//! Schema description of the `tags` collection

use database::mongodb::schema::{DocumentSchema, FieldKind, FieldSpec};
use once_cell::sync::Lazy;

pub static TAG_SCHEMA: Lazy<DocumentSchema> = Lazy::new(|| {
    DocumentSchema::new(
        "tags",
        vec![
            FieldSpec::new("name", FieldKind::String).required().unique(),
            FieldSpec::new("created_at", FieldKind::DateTime),
            FieldSpec::new("updated_at", FieldKind::DateTime),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_name_is_required_and_unique() {
        let unique: Vec<_> = TAG_SCHEMA.unique_fields().collect();
        assert_eq!(unique, vec!["name"]);
        assert!(TAG_SCHEMA.check_required(&doc! {}).is_err());
        assert!(TAG_SCHEMA.check_required(&doc! { "name": "Soccer" }).is_ok());
    }

    #[test]
    fn test_no_hidden_fields() {
        assert_eq!(TAG_SCHEMA.hidden_fields().count(), 0);
    }
}

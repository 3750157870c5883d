use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Tag record as persisted in the `tags` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Store-assigned identifier; `None` until the record is inserted
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique display name (e.g. "Soccer", "Basket Ball")
    pub name: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Tag {
    /// Assemble a new tag; the store layer assigns `_id` and re-stamps the
    /// timestamps at insert.
    pub fn new(name: String) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for the tag creation operation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

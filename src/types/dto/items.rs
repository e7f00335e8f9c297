use poem_openapi::{Enum, Object};

use crate::types::db::item;

/// Whether a listing reports a lost or a found item
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Lost,
    Found,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Lost => "Lost",
            PostType::Found => "Found",
        }
    }
}

/// The fixed set of caller-writable item fields.
///
/// Used for both creation and full-field replacement; fields outside this
/// set never reach the store.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ItemPayload {
    /// Image reference/URI for the listing
    pub thumbnail: String,

    /// Title of the listing
    pub title: String,

    /// "Lost" or "Found"
    pub post_type: PostType,

    /// Free-form description
    pub description: String,

    /// Category label
    pub category: String,

    /// Date the item was lost or found
    pub date: String,

    /// Where the item was lost or found
    pub location: String,
}

/// A stored item listing
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Store-assigned unique identifier
    pub id: String,

    /// Image reference/URI for the listing
    pub thumbnail: String,

    /// Title of the listing
    pub title: String,

    /// "Lost" or "Found"
    pub post_type: String,

    /// Free-form description
    pub description: String,

    /// Category label
    pub category: String,

    /// Date the item was lost or found
    pub date: String,

    /// Where the item was lost or found
    pub location: String,
}

impl From<item::Model> for ItemRecord {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            thumbnail: model.thumbnail,
            title: model.title,
            post_type: model.post_type,
            description: model.description,
            category: model.category,
            date: model.date,
            location: model.location,
        }
    }
}

/// One page of the item catalog plus the pre-pagination match count
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct PagedItemsResponse {
    /// The requested page slice
    pub items: Vec<ItemRecord>,

    /// Total matching items before pagination
    pub total: u64,
}

/// Acknowledgement for an insert operation
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct InsertAck {
    /// Store-assigned identifier of the new record
    pub inserted_id: String,
}

/// Acknowledgement for a replace-with-upsert operation
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateAck {
    /// Number of records the filter matched
    pub matched_count: u64,

    /// Number of records modified
    pub modified_count: u64,

    /// Identifier of the inserted record when the update upserted
    pub upserted_id: Option<String>,
}

/// Acknowledgement for a delete operation
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct DeleteAck {
    /// Number of records removed
    pub deleted_count: u64,
}

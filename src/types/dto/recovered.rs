use poem_openapi::Object;

use crate::types::db::recovered_item;

/// Caller-supplied recovery report
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct RecoveredItemPayload {
    /// Identifier of the recovered item listing
    pub item_id: String,

    /// Email of the person who recovered the item
    pub recovered_user_email: String,

    /// Display name of the person who recovered the item
    pub recovered_user_name: String,

    /// Date the item was recovered
    pub recovered_date: String,

    /// Where the item was recovered
    pub recovered_location: String,
}

/// A stored recovery record
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct RecoveredItemRecord {
    /// Store-assigned unique identifier
    pub id: String,

    /// Identifier of the recovered item listing
    pub item_id: String,

    /// Email of the person who recovered the item
    pub recovered_user_email: String,

    /// Display name of the person who recovered the item
    pub recovered_user_name: String,

    /// Date the item was recovered
    pub recovered_date: String,

    /// Where the item was recovered
    pub recovered_location: String,
}

impl From<recovered_item::Model> for RecoveredItemRecord {
    fn from(model: recovered_item::Model) -> Self {
        Self {
            id: model.id,
            item_id: model.item_id,
            recovered_user_email: model.recovered_user_email,
            recovered_user_name: model.recovered_user_name,
            recovered_date: model.recovered_date,
            recovered_location: model.recovered_location,
        }
    }
}

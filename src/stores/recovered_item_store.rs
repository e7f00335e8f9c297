use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::types::db::recovered_item::{self, Entity as RecoveredItem};
use crate::types::dto::recovered::RecoveredItemPayload;

/// RecoveredItemStore manages recovery records.
///
/// Records are insert-only: nothing in the system updates or deletes them.
pub struct RecoveredItemStore {
    db: DatabaseConnection,
}

impl RecoveredItemStore {
    /// Create a new RecoveredItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new recovery record and return its store-assigned id
    pub async fn insert(&self, payload: RecoveredItemPayload) -> Result<String, ApiError> {
        let id = Uuid::new_v4().to_string();

        let new_record = recovered_item::ActiveModel {
            id: Set(id.clone()),
            item_id: Set(payload.item_id),
            recovered_user_email: Set(payload.recovered_user_email),
            recovered_user_name: Set(payload.recovered_user_name),
            recovered_date: Set(payload.recovered_date),
            recovered_location: Set(payload.recovered_location),
        };

        new_record
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        Ok(id)
    }

    /// Return the recovery records for a single recovering user
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<recovered_item::Model>, ApiError> {
        RecoveredItem::find()
            .filter(recovered_item::Column::RecoveredUserEmail.eq(email))
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Return every recovery record
    pub async fn find_all(&self) -> Result<Vec<recovered_item::Model>, ApiError> {
        RecoveredItem::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }
}

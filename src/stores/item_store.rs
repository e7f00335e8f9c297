use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::types::db::item::{self, Entity as Item};
use crate::types::dto::items::ItemPayload;

/// Result of a replace-with-upsert call
#[derive(Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing record matched and was replaced
    Replaced,
    /// No record matched; one was created under the given id
    Created(String),
}

/// ItemStore manages lost-and-found listings in the items collection
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new item and return its store-assigned id
    pub async fn insert(&self, payload: ItemPayload) -> Result<String, ApiError> {
        let id = Uuid::new_v4().to_string();

        let new_item = item::ActiveModel {
            id: Set(id.clone()),
            thumbnail: Set(payload.thumbnail),
            title: Set(payload.title),
            post_type: Set(payload.post_type.as_str().to_string()),
            description: Set(payload.description),
            category: Set(payload.category),
            date: Set(payload.date),
            location: Set(payload.location),
        };

        new_item
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        Ok(id)
    }

    /// Return every item, unpaginated
    pub async fn find_all(&self) -> Result<Vec<item::Model>, ApiError> {
        Item::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Look up a single item by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<item::Model>, ApiError> {
        Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Return one catalog page plus the pre-pagination match count.
    ///
    /// A search term filters on a case-insensitive substring match against
    /// title OR location. `page` is 1-based; `skip = (page - 1) * limit`.
    pub async fn search_page(
        &self,
        search: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<item::Model>, u64), ApiError> {
        let mut select = Item::find();
        if let Some(term) = search {
            select = select.filter(Self::search_condition(term));
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        let skip = (page - 1) * limit;
        let items = select
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        Ok((items, total))
    }

    /// Replace the fixed field set on the item with the given id, creating
    /// the record when no match exists
    pub async fn replace(
        &self,
        id: &str,
        payload: ItemPayload,
    ) -> Result<UpsertOutcome, ApiError> {
        let existing = self.find_by_id(id).await?;

        match existing {
            Some(model) => {
                let mut active: item::ActiveModel = model.into();
                active.thumbnail = Set(payload.thumbnail);
                active.title = Set(payload.title);
                active.post_type = Set(payload.post_type.as_str().to_string());
                active.description = Set(payload.description);
                active.category = Set(payload.category);
                active.date = Set(payload.date);
                active.location = Set(payload.location);

                active
                    .update(&self.db)
                    .await
                    .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

                Ok(UpsertOutcome::Replaced)
            }
            None => {
                let new_item = item::ActiveModel {
                    id: Set(id.to_string()),
                    thumbnail: Set(payload.thumbnail),
                    title: Set(payload.title),
                    post_type: Set(payload.post_type.as_str().to_string()),
                    description: Set(payload.description),
                    category: Set(payload.category),
                    date: Set(payload.date),
                    location: Set(payload.location),
                };

                new_item
                    .insert(&self.db)
                    .await
                    .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

                Ok(UpsertOutcome::Created(id.to_string()))
            }
        }
    }

    /// Delete the item with the given id, returning the removed-row count
    pub async fn delete(&self, id: &str) -> Result<u64, ApiError> {
        let result = Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        Ok(result.rows_affected)
    }

    // Case folding is done in SQL so the comparison stays store-side
    // regardless of the backend's LIKE collation.
    fn search_condition(term: &str) -> Condition {
        let pattern = format!("%{}%", term.to_lowercase());
        Condition::any()
            .add(Expr::cust_with_values("LOWER(title) LIKE ?", [pattern.clone()]))
            .add(Expr::cust_with_values("LOWER(location) LIKE ?", [pattern]))
    }
}

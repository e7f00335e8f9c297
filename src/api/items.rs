use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use std::sync::Arc;

use crate::api::{helpers, TokenAuth};
use crate::errors::ApiError;
use crate::services::TokenService;
use crate::stores::{ItemStore, UpsertOutcome};
use crate::types::dto::items::{
    DeleteAck, InsertAck, ItemPayload, ItemRecord, PagedItemsResponse, UpdateAck,
};

/// Item catalog API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
    token_service: Arc<TokenService>,
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Lost-and-found item endpoints
    Items,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given store and token service
    pub fn new(item_store: Arc<ItemStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            item_store,
            token_service,
        }
    }
}

#[OpenApi]
impl ItemsApi {
    /// Submit a new lost-or-found listing
    #[oai(path = "/addItems", method = "post", tag = "ItemTags::Items")]
    async fn add_item(
        &self,
        auth: TokenAuth,
        body: Json<ItemPayload>,
    ) -> Result<Json<InsertAck>, ApiError> {
        self.token_service.verify(&auth.0.key)?;

        let inserted_id = self.item_store.insert(body.0).await?;

        Ok(Json(InsertAck { inserted_id }))
    }

    /// Return every listing, unpaginated
    #[oai(path = "/addItems", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<ItemRecord>>, ApiError> {
        let items = self.item_store.find_all().await?;

        Ok(Json(items.into_iter().map(ItemRecord::from).collect()))
    }

    /// Paginated catalog with optional search
    ///
    /// `search` filters on a case-insensitive substring match against title
    /// or location. `page`/`limit` are accepted as raw strings; anything
    /// unusable falls back to the defaults (1 and 6) instead of erroring.
    #[oai(path = "/allItems", method = "get", tag = "ItemTags::Items")]
    async fn all_items(
        &self,
        search: Query<Option<String>>,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> Result<Json<PagedItemsResponse>, ApiError> {
        let page = helpers::parse_positive_or(page.0.as_deref(), helpers::DEFAULT_PAGE);
        let limit = helpers::parse_positive_or(limit.0.as_deref(), helpers::DEFAULT_LIMIT);
        let search_term = search.0.as_deref().filter(|s| !s.is_empty());

        let (items, total) = self.item_store.search_page(search_term, page, limit).await?;

        Ok(Json(PagedItemsResponse {
            items: items.into_iter().map(ItemRecord::from).collect(),
            total,
        }))
    }

    /// Fetch a single listing by id; answers `null` when absent
    #[oai(path = "/addItems/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Option<ItemRecord>>, ApiError> {
        let item = self.item_store.find_by_id(&id.0).await?;

        Ok(Json(item.map(ItemRecord::from)))
    }

    /// Replace the fixed field set on a listing, creating it when absent
    ///
    /// Only the fields of the payload are replaceable; anything else a
    /// caller sends is dropped by deserialization and never stored.
    #[oai(path = "/addItems/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        auth: TokenAuth,
        id: Path<String>,
        body: Json<ItemPayload>,
    ) -> Result<Json<UpdateAck>, ApiError> {
        self.token_service.verify(&auth.0.key)?;

        let ack = match self.item_store.replace(&id.0, body.0).await? {
            UpsertOutcome::Replaced => UpdateAck {
                matched_count: 1,
                modified_count: 1,
                upserted_id: None,
            },
            UpsertOutcome::Created(new_id) => UpdateAck {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(new_id),
            },
        };

        Ok(Json(ack))
    }

    /// Remove a listing by id
    #[oai(path = "/addItems/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<DeleteAck>, ApiError> {
        let deleted_count = self.item_store.delete(&id.0).await?;

        Ok(Json(DeleteAck { deleted_count }))
    }

    /// Fetch a single listing under the details path (same lookup as
    /// GET /addItems/:id; both paths are part of the public contract)
    #[oai(path = "/itemDetails/:id", method = "get", tag = "ItemTags::Items")]
    async fn item_details(&self, id: Path<String>) -> Result<Json<Option<ItemRecord>>, ApiError> {
        let item = self.item_store.find_by_id(&id.0).await?;

        Ok(Json(item.map(ItemRecord::from)))
    }
}

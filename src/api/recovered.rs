use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::TokenAuth;
use crate::errors::ApiError;
use crate::services::TokenService;
use crate::stores::RecoveredItemStore;
use crate::types::dto::items::InsertAck;
use crate::types::dto::recovered::{RecoveredItemPayload, RecoveredItemRecord};

/// Recovery record API endpoints
pub struct RecoveredItemsApi {
    recovered_item_store: Arc<RecoveredItemStore>,
    token_service: Arc<TokenService>,
}

/// API tags for recovery endpoints
#[derive(Tags)]
enum RecoveredTags {
    /// Recovered item endpoints
    RecoveredItems,
}

impl RecoveredItemsApi {
    /// Create a new RecoveredItemsApi with the given store and token service
    pub fn new(
        recovered_item_store: Arc<RecoveredItemStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            recovered_item_store,
            token_service,
        }
    }
}

#[OpenApi]
impl RecoveredItemsApi {
    /// Record that an item was recovered
    #[oai(
        path = "/addRecoveredItemInfo",
        method = "post",
        tag = "RecoveredTags::RecoveredItems"
    )]
    async fn add_recovered_item(
        &self,
        body: Json<RecoveredItemPayload>,
    ) -> Result<Json<InsertAck>, ApiError> {
        let inserted_id = self.recovered_item_store.insert(body.0).await?;

        Ok(Json(InsertAck { inserted_id }))
    }

    /// List the caller's own recovery records
    ///
    /// The `email` query parameter must equal the email claim in the
    /// caller's credential; any mismatch is Forbidden.
    #[oai(
        path = "/addRecoveredItemInfo",
        method = "get",
        tag = "RecoveredTags::RecoveredItems"
    )]
    async fn my_recovered_items(
        &self,
        auth: TokenAuth,
        email: Query<Option<String>>,
    ) -> Result<Json<Vec<RecoveredItemRecord>>, ApiError> {
        let claims = self.token_service.verify(&auth.0.key)?;

        let email = email.0.unwrap_or_default();
        if claims.email != email {
            return Err(ApiError::email_mismatch());
        }

        let records = self.recovered_item_store.find_by_email(&email).await?;

        Ok(Json(
            records.into_iter().map(RecoveredItemRecord::from).collect(),
        ))
    }

    /// List every recovery record
    #[oai(
        path = "/AllRecoveredItemInfo",
        method = "get",
        tag = "RecoveredTags::RecoveredItems"
    )]
    async fn all_recovered_items(
        &self,
        auth: TokenAuth,
    ) -> Result<Json<Vec<RecoveredItemRecord>>, ApiError> {
        self.token_service.verify(&auth.0.key)?;

        let records = self.recovered_item_store.find_all().await?;

        Ok(Json(
            records.into_iter().map(RecoveredItemRecord::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{MigratorTrait, RegistryMigrator};
    use poem_openapi::auth::ApiKey;
    use sea_orm::Database;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    async fn setup_test_api() -> (RecoveredItemsApi, Arc<TokenService>) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        RegistryMigrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let token_service = Arc::new(TokenService::new(TEST_SECRET.to_string()));
        let api = RecoveredItemsApi::new(
            Arc::new(RecoveredItemStore::new(db)),
            token_service.clone(),
        );

        (api, token_service)
    }

    fn auth_for(token_service: &TokenService, email: &str) -> TokenAuth {
        TokenAuth(ApiKey {
            key: token_service.issue(email).unwrap(),
        })
    }

    fn payload(email: &str) -> RecoveredItemPayload {
        RecoveredItemPayload {
            item_id: "item-1".to_string(),
            recovered_user_email: email.to_string(),
            recovered_user_name: "Finder".to_string(),
            recovered_date: "2025-03-05".to_string(),
            recovered_location: "Dhaka".to_string(),
        }
    }

    #[tokio::test]
    async fn test_my_recovered_items_returns_own_records() {
        let (api, token_service) = setup_test_api().await;

        api.add_recovered_item(Json(payload("a@x.com"))).await.unwrap();
        api.add_recovered_item(Json(payload("b@x.com"))).await.unwrap();

        let records = api
            .my_recovered_items(
                auth_for(&token_service, "a@x.com"),
                Query(Some("a@x.com".to_string())),
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records.0[0].recovered_user_email, "a@x.com");
    }

    #[tokio::test]
    async fn test_my_recovered_items_rejects_email_mismatch() {
        let (api, token_service) = setup_test_api().await;

        let result = api
            .my_recovered_items(
                auth_for(&token_service, "b@x.com"),
                Query(Some("a@x.com".to_string())),
            )
            .await;

        match result {
            Err(ApiError::Forbidden(body)) => {
                assert_eq!(body.0.status_code, 403);
            }
            _ => panic!("Expected Forbidden error"),
        }
    }

    #[tokio::test]
    async fn test_my_recovered_items_rejects_missing_email_param() {
        let (api, token_service) = setup_test_api().await;

        // No email query parameter can never equal a real claim
        let result = api
            .my_recovered_items(auth_for(&token_service, "a@x.com"), Query(None))
            .await;

        match result {
            Err(ApiError::Forbidden(_)) => {}
            _ => panic!("Expected Forbidden error"),
        }
    }

    #[tokio::test]
    async fn test_my_recovered_items_rejects_invalid_token() {
        let (api, _token_service) = setup_test_api().await;

        let result = api
            .my_recovered_items(
                TokenAuth(ApiKey {
                    key: "garbage".to_string(),
                }),
                Query(Some("a@x.com".to_string())),
            )
            .await;

        match result {
            Err(ApiError::Forbidden(_)) => {}
            _ => panic!("Expected Forbidden error"),
        }
    }

    #[tokio::test]
    async fn test_all_recovered_items_lists_everything() {
        let (api, token_service) = setup_test_api().await;

        api.add_recovered_item(Json(payload("a@x.com"))).await.unwrap();
        api.add_recovered_item(Json(payload("b@x.com"))).await.unwrap();

        let records = api
            .all_recovered_items(auth_for(&token_service, "anyone@x.com"))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
    }
}

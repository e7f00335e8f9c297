use std::sync::Arc;

use migration::{MigratorTrait, RegistryMigrator};
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::config::AppSettings;
use crate::services::TokenService;
use crate::stores::{ItemStore, RecoveredItemStore};

/// Centralized application data following the main-owned stores pattern.
///
/// Every dependency is created once at startup and shared across the API
/// structs. The single database connection lives here for the lifetime of
/// the process; request handlers own nothing durable.
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
    pub recovered_item_store: Arc<RecoveredItemStore>,
    pub token_service: Arc<TokenService>,
}

impl AppData {
    /// Connect to the database, run migrations, and build all stores
    ///
    /// # Errors
    ///
    /// Returns `DbErr` when the connection or a migration fails
    pub async fn init(settings: &AppSettings) -> Result<Self, DbErr> {
        let db = Database::connect(settings.database_url()).await?;
        tracing::debug!("Connected to database: {}", settings.database_url());

        RegistryMigrator::up(&db, None).await?;
        tracing::debug!("Database migrations completed");

        Ok(Self::from_connection(db, settings.access_token_secret()))
    }

    /// Build stores over an existing connection.
    ///
    /// Used by `init` and by tests that bring their own in-memory database.
    pub fn from_connection(db: DatabaseConnection, access_token_secret: &str) -> Self {
        let item_store = Arc::new(ItemStore::new(db.clone()));
        let recovered_item_store = Arc::new(RecoveredItemStore::new(db.clone()));
        let token_service = Arc::new(TokenService::new(access_token_secret.to_string()));

        Self {
            db,
            item_store,
            recovered_item_store,
            token_service,
        }
    }
}

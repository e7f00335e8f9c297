// Common test utilities for integration tests

use migration::{MigratorTrait, RegistryMigrator};
use poem::Endpoint;
use sea_orm::Database;

use whereisit_backend::api;
use whereisit_backend::app_data::AppData;
use whereisit_backend::config::AppSettings;

pub const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Build the full application endpoint over an in-memory database.
///
/// Returns the endpoint plus the AppData so tests can mint credentials with
/// the same token service the app verifies against.
pub async fn setup_test_app() -> (impl Endpoint, AppData) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    RegistryMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::from_connection(db, TEST_SECRET);
    let settings = AppSettings::for_testing(TEST_SECRET, false);

    let app = api::build_app(&app_data, &settings);

    (app, app_data)
}

/// Render a request Cookie header for the given token value
pub fn token_cookie(token: &str) -> String {
    format!("token={}", token)
}

// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod helpers;
pub mod items;
pub mod recovered;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use items::ItemsApi;
pub use recovered::RecoveredItemsApi;

use poem::middleware::{CookieJarManager, Cors};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::auth::ApiKey;
use poem_openapi::{OpenApiService, SecurityScheme};

use crate::app_data::AppData;
use crate::config::AppSettings;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Session credential carried in the `token` cookie.
///
/// A request without the cookie never reaches the handler: the scheme
/// rejects it with 401. Handlers verify the extracted value themselves and
/// answer 403 when it fails.
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "token", key_in = "cookie")]
pub struct TokenAuth(pub ApiKey);

/// Assemble the full application endpoint: API routes at the root, Swagger
/// UI, cookie management, and the CORS allow-list with credentials enabled.
pub fn build_app(app_data: &AppData, settings: &AppSettings) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(app_data.token_service.clone(), settings.production()),
            ItemsApi::new(app_data.item_store.clone(), app_data.token_service.clone()),
            RecoveredItemsApi::new(
                app_data.recovered_item_store.clone(),
                app_data.token_service.clone(),
            ),
        ),
        "WhereIsIt",
        "1.0.0",
    );

    let ui = api_service.swagger_ui();

    let cors = settings
        .cors_origins()
        .iter()
        .fold(Cors::new(), |cors, origin| cors.allow_origin(origin.as_str()))
        .allow_credentials(true);

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(CookieJarManager::new())
        .with(cors)
}

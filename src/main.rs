use poem::{listener::TcpListener, Server};

use whereisit_backend::api;
use whereisit_backend::app_data::AppData;
use whereisit_backend::config::{self, AppSettings};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let settings = AppSettings::from_env().expect("Failed to load application settings");

    let app_data = AppData::init(&settings)
        .await
        .expect("Failed to initialize application data");

    let app = api::build_app(&app_data, &settings);

    tracing::info!(
        "WhereIsIt server is running on http://{}",
        settings.server_address()
    );
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.server_address()
    );

    Server::new(TcpListener::bind(settings.server_address()))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await
}

use anyhow::{Context, Result};
use api::{MIGRATOR, handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let enable_file_log = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront-api", is_dev, enable_file_log);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting storefront API initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    MIGRATOR
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state).await
}

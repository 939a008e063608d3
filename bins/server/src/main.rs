//! ResumeLink API Server
//!
//! Main entry point for the ResumeLink backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resumelink_api::{AppState, create_router};
use resumelink_core::storage::{StorageConfig, StorageService};
use resumelink_db::connect;
use resumelink_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumelink=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Connected to database");

    // Create storage client
    let storage_config = StorageConfig::new(
        config.storage.cloud_name.clone(),
        config.storage.api_key.clone(),
        config.storage.api_secret.clone(),
    );
    let storage = StorageService::from_config(storage_config)?;
    info!(cloud_name = %config.storage.cloud_name, "Storage client configured");

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        storage: Arc::new(storage),
        base_url: config.server.base_url.trim_end_matches('/').to_string(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Application state shared across handlers
//! - Centralized error-to-response translation

pub mod error;
pub mod routes;

use axum::Router;
use resumelink_core::storage::StorageService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Constructed once at startup; holds the process-wide database pool and
/// storage client.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Object storage client.
    pub storage: Arc<StorageService>,
    /// Externally visible base URL used to build tracking links.
    pub base_url: String,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

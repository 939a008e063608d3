//! API route definitions.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

pub mod health;
pub mod resume;

/// Service descriptor with the endpoint map.
async fn service_descriptor() -> Json<Value> {
    Json(json!({
        "message": "ResumeLink API",
        "endpoints": {
            "upload": "POST /resume/upload",
            "download": "GET /resume/{id}",
            "stats": "GET /resume/stats/{id}"
        }
    }))
}

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_descriptor))
        .merge(health::routes())
        .nest("/resume", resume::routes())
}

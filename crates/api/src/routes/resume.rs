//! Resume routes: upload, download tracking, and stats.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use resumelink_core::resume::{ResumeService, UploadResumeInput};
use resumelink_core::storage::{StorageConfig, StorageService};
use resumelink_db::ResumeRepository;

/// Allowance for multipart framing and the username field on top of the
/// file size limit.
const FORM_OVERHEAD: usize = 1024 * 1024;

/// Request body cap for uploads.
#[allow(clippy::cast_possible_truncation)]
const MAX_BODY_BYTES: usize = StorageConfig::DEFAULT_MAX_FILE_SIZE as usize + FORM_OVERHEAD;

/// Creates the resume routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_resume).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/stats/{id}", get(resume_stats))
        .route("/{id}", get(download_resume))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a successful upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Created record ID.
    pub resume_id: Uuid,
    /// Direct provider link, publicly accessible.
    pub direct_link: String,
    /// Backend link that counts views before redirecting.
    pub tracking_link: String,
    /// Usage hint for the two links.
    pub note: String,
}

/// Response envelope for the stats endpoint.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Stats payload.
    pub data: StatsData,
}

/// Non-secret record metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    /// Owner username.
    pub username: String,
    /// Client-supplied filename.
    pub original_name: String,
    /// Download view count.
    pub views: i64,
    /// Creation timestamp (ISO 8601).
    pub uploaded_at: String,
    /// Tracking URL for this record.
    pub public_url: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the resume service from shared state.
fn resume_service(state: &AppState) -> ResumeService<ResumeRepository, StorageService> {
    let repo = ResumeRepository::new(state.db.clone());
    ResumeService::new(state.storage.clone(), Arc::new(repo))
}

/// Tracking link for a record: `{base}/resume/{id}`.
fn tracking_link(base_url: &str, id: Uuid) -> String {
    format!("{}/resume/{}", base_url.trim_end_matches('/'), id)
}

/// Map a multipart parsing failure (malformed body, field over the body
/// limit) to a validation error.
fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::validation(format!("invalid multipart body: {err}"))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/resume/upload`
/// Accept a PDF and a username, store the file, persist a record.
async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut username: Option<String> = None;
    let mut file: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("username") => {
                username = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("resume") => {
                let original_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((original_name, content_type, bytes));
            }
            _ => {}
        }
    }

    let (Some(username), Some((original_name, content_type, bytes))) = (username, file) else {
        return Err(ApiError::validation("Username and resume required"));
    };

    let record = resume_service(&state)
        .upload(UploadResumeInput {
            username,
            original_name,
            content_type,
            bytes,
        })
        .await?;

    info!(resume_id = %record.id, username = %record.username, "Resume uploaded");

    Ok(Json(UploadResponse {
        message: "Resume uploaded successfully".to_string(),
        resume_id: record.id,
        direct_link: record.resume_url,
        tracking_link: tracking_link(&state.base_url, record.id),
        note: "Use directLink for instant access. Use trackingLink for view count tracking."
            .to_string(),
    }))
}

/// GET `/resume/{id}`
/// Count the view and redirect to the attachment URL.
async fn download_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let url = resume_service(&state).record_download(id).await?;

    info!(resume_id = %id, "Download redirect issued");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

/// GET `/resume/stats/{id}`
/// Non-secret record metadata. Read-only.
async fn resume_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatsResponse>, ApiError> {
    let record = resume_service(&state).stats(id).await?;

    Ok(Json(StatsResponse {
        success: true,
        data: StatsData {
            username: record.username,
            original_name: record.original_name,
            views: record.views,
            uploaded_at: record.created_at.to_rfc3339(),
            public_url: tracking_link(&state.base_url, record.id),
        },
    }))
}

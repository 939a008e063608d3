//! Resume types and data structures.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Resume metadata domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// Owner username as supplied at upload.
    pub username: String,
    /// Public delivery URL of the stored object.
    pub resume_url: String,
    /// Provider-assigned object identifier. Never changes after creation.
    pub public_id: String,
    /// Client-supplied filename.
    pub original_name: String,
    /// Download view counter.
    pub views: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for uploading a resume.
#[derive(Debug, Clone)]
pub struct UploadResumeInput {
    /// Owner username.
    pub username: String,
    /// Client-supplied filename.
    pub original_name: String,
    /// Declared MIME type of the file.
    pub content_type: String,
    /// File contents.
    pub bytes: Bytes,
}

/// Input for creating a resume record.
#[derive(Debug, Clone)]
pub struct CreateResumeInput {
    /// Record ID.
    pub id: Uuid,
    /// Owner username.
    pub username: String,
    /// Public delivery URL of the stored object.
    pub resume_url: String,
    /// Provider-assigned object identifier.
    pub public_id: String,
    /// Client-supplied filename.
    pub original_name: String,
}

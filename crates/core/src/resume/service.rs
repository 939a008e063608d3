//! Resume service implementation.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::error::ResumeError;
use super::types::{CreateResumeInput, ResumeRecord, UploadResumeInput};
use crate::storage::{ObjectStorage, attachment_url};

/// Repository trait for resume persistence.
///
/// Implemented by the db crate to provide actual database operations.
pub trait ResumeStore: Send + Sync {
    /// Create a new resume record.
    fn create(
        &self,
        input: CreateResumeInput,
    ) -> impl std::future::Future<Output = Result<ResumeRecord, ResumeError>> + Send;

    /// Find a resume record by ID.
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ResumeRecord>, ResumeError>> + Send;

    /// Persist a new view count for a record.
    fn update_views(
        &self,
        id: Uuid,
        views: i64,
    ) -> impl std::future::Future<Output = Result<ResumeRecord, ResumeError>> + Send;
}

/// Resume service for upload, download tracking, and stats.
pub struct ResumeService<R: ResumeStore, S: ObjectStorage> {
    storage: Arc<S>,
    store: Arc<R>,
}

impl<R: ResumeStore, S: ObjectStorage> ResumeService<R, S> {
    /// Create a new resume service.
    #[must_use]
    pub fn new(storage: Arc<S>, store: Arc<R>) -> Self {
        Self { storage, store }
    }

    /// Upload a resume: validate, transfer to storage, persist metadata.
    ///
    /// The metadata record is written only after the storage transfer
    /// succeeds; a provider failure leaves no partial state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username is empty or the file is missing
    /// - The declared MIME type is not allowed or the file is too large
    /// - The storage transfer or the metadata write fails
    pub async fn upload(&self, input: UploadResumeInput) -> Result<ResumeRecord, ResumeError> {
        let username = input.username.trim();
        if username.is_empty() {
            return Err(ResumeError::validation("username is required"));
        }
        if input.bytes.is_empty() {
            return Err(ResumeError::validation("resume file is required"));
        }
        let size = u64::try_from(input.bytes.len()).unwrap_or(u64::MAX);
        self.storage.validate_upload(&input.content_type, size)?;

        let key = self.storage.object_key(username, Utc::now());
        let stored = self
            .storage
            .upload(&key, input.bytes, &input.content_type)
            .await?;

        // No cleanup on failure past this point: a failed metadata write
        // leaves the stored object orphaned, so the error carries the key.
        self.store
            .create(CreateResumeInput {
                id: Uuid::new_v4(),
                username: username.to_string(),
                resume_url: stored.url,
                public_id: stored.public_id,
                original_name: input.original_name,
            })
            .await
            .map_err(|e| match e {
                ResumeError::Repository(msg) => ResumeError::repository(format!(
                    "{msg}; stored object '{key}' has no metadata record"
                )),
                other => other,
            })
    }

    /// Record a download: increment the view counter and return the URL the
    /// caller should be redirected to.
    ///
    /// The increment is a read-modify-write with no locking; concurrent
    /// downloads of the same record may under-count.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or persistence fails.
    pub async fn record_download(&self, id: Uuid) -> Result<String, ResumeError> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ResumeError::not_found(id))?;

        let updated = self.store.update_views(id, record.views + 1).await?;

        Ok(attachment_url(&updated.resume_url))
    }

    /// Fetch a record for the stats endpoint. Read-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the lookup fails.
    pub async fn stats(&self, id: Uuid) -> Result<ResumeRecord, ResumeError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ResumeError::not_found(id))
    }
}

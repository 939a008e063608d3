//! Storage service implementation for the provider upload API.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::config::StorageConfig;
use super::error::StorageError;

/// A stored object as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Public delivery URL of the object.
    pub url: String,
    /// Provider-assigned object identifier.
    pub public_id: String,
}

/// Object storage operations consumed by the resume service.
///
/// `StorageService` is the single provider implementation; the trait exists
/// so services can be constructed with an in-memory stand-in under test.
pub trait ObjectStorage: Send + Sync {
    /// Validate a prospective upload against size and MIME constraints.
    fn validate_upload(&self, content_type: &str, size: u64) -> Result<(), StorageError>;

    /// Derive the object key for an upload by `username` at `uploaded_at`.
    fn object_key(&self, username: &str, uploaded_at: DateTime<Utc>) -> String;

    /// Transfer a byte buffer to the provider under `key`.
    fn upload(
        &self,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<StoredObject, StorageError>> + Send;
}

/// Storage service backed by the provider's HTTP upload API.
pub struct StorageService {
    http: reqwest::Client,
    config: StorageConfig,
}

/// Successful upload response body from the provider.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| StorageError::configuration(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Upload endpoint for raw (non-image) objects.
    fn upload_endpoint(&self) -> String {
        format!(
            "{}/v1_1/{}/raw/upload",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

impl ObjectStorage for StorageService {
    fn validate_upload(&self, content_type: &str, size: u64) -> Result<(), StorageError> {
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }

        if !self.config.is_mime_type_allowed(content_type) {
            return Err(StorageError::invalid_mime_type(content_type));
        }

        Ok(())
    }

    /// Format: `{prefix}/{sanitized_username}_{unix_millis}`
    fn object_key(&self, username: &str, uploaded_at: DateTime<Utc>) -> String {
        format!(
            "{}/{}_{}",
            self.config.key_prefix,
            sanitize_username(username),
            uploaded_at.timestamp_millis()
        )
    }

    async fn upload(
        &self,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let timestamp = Utc::now().timestamp().to_string();

        // Signed parameters, alphabetical by name. `api_key` and the file
        // itself are excluded from the signature.
        let params = [
            ("invalidate", "true"),
            ("public_id", key),
            ("timestamp", timestamp.as_str()),
            ("type", "upload"),
        ];
        let signature = sign_params(&params, &self.config.api_secret);

        let file = reqwest::multipart::Part::bytes(bytes.to_vec())
            .file_name(key.to_string())
            .mime_str(content_type)?;

        let mut form = reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .part("file", file);
        for (name, value) in params {
            form = form.text(name.to_string(), value.to_string());
        }

        let response = self
            .http
            .post(self.upload_endpoint())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::provider(
                status.as_u16(),
                provider_error_message(&body),
            ));
        }

        let uploaded: UploadResponse = response.json().await?;
        Ok(StoredObject {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}

/// Sign request parameters with the API secret.
///
/// The signature is the SHA-256 hex digest of the `name=value` pairs joined
/// with `&` in ascending name order, concatenated with the secret.
fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.to_vec();
    sorted.sort_by_key(|(name, _)| *name);

    let mut to_sign = sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    to_sign.push_str(api_secret);

    hex::encode(Sha256::digest(to_sign.as_bytes()))
}

/// Extract the human-readable message from a provider error body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Sanitize a username into an identifier-safe token.
///
/// Every character outside ASCII alphanumerics is replaced with `_`.
#[must_use]
pub fn sanitize_username(username: &str) -> String {
    username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Rewrite a delivery URL so the provider serves the object as an attachment
/// download instead of rendering it inline.
///
/// Inserts the `fl_attachment/` transformation segment after the first
/// `/upload/` path segment. URLs without an `/upload/` segment are returned
/// unchanged.
#[must_use]
pub fn attachment_url(url: &str) -> String {
    url.replacen("/upload/", "/upload/fl_attachment/", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn service() -> StorageService {
        StorageService::from_config(StorageConfig::new("demo", "key", "shhh"))
            .expect("should create service")
    }

    #[rstest]
    #[case("jane_doe", "jane_doe")]
    #[case("jane doe", "jane_doe")]
    #[case("jane.doe@example.com", "jane_doe_example_com")]
    #[case("Jéan-Luc", "J_an_Luc")]
    #[case("日本語", "___")]
    fn test_sanitize_username(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_username(input), expected);
    }

    #[test]
    fn test_object_key_format() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).expect("valid timestamp");
        let key = service().object_key("jane doe", at);
        assert_eq!(key, "resumes/jane_doe_1700000000000");
    }

    #[test]
    fn test_object_key_unique_across_instants() {
        let svc = service();
        let first = DateTime::from_timestamp_millis(1_700_000_000_000).expect("valid timestamp");
        let second = DateTime::from_timestamp_millis(1_700_000_000_001).expect("valid timestamp");
        assert_ne!(
            svc.object_key("jane_doe", first),
            svc.object_key("jane_doe", second)
        );
    }

    #[test]
    fn test_validate_upload_size() {
        let svc = StorageService::from_config(
            StorageConfig::new("demo", "key", "shhh").with_max_file_size(1024),
        )
        .expect("should create service");

        assert!(svc.validate_upload("application/pdf", 512).is_ok());
        assert!(svc.validate_upload("application/pdf", 1024).is_ok());

        let err = svc.validate_upload("application/pdf", 2048).unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { .. }));
    }

    #[test]
    fn test_validate_upload_mime_type() {
        let svc = service();
        assert!(svc.validate_upload("application/pdf", 1024).is_ok());

        let err = svc.validate_upload("image/png", 1024).unwrap_err();
        assert!(matches!(err, StorageError::InvalidMimeType { .. }));
    }

    #[test]
    fn test_upload_endpoint() {
        assert_eq!(
            service().upload_endpoint(),
            "https://api.cloudinary.com/v1_1/demo/raw/upload"
        );
    }

    #[test]
    fn test_sign_params_known_digest() {
        let signature = sign_params(
            &[
                ("type", "upload"),
                ("public_id", "resumes/jane_doe_1700000000000"),
                ("invalidate", "true"),
                ("timestamp", "1700000000"),
            ],
            "shhh",
        );
        // sha256 of
        // "invalidate=true&public_id=resumes/jane_doe_1700000000000&timestamp=1700000000&type=upload" + "shhh"
        assert_eq!(
            signature,
            "81290fa42bf4798d4a7da83ddcc9c657261b62469d1f40c58da40fdb8a199039"
        );
    }

    #[rstest]
    #[case(
        "https://res.cloudinary.com/demo/raw/upload/v1/resumes/jane_1.pdf",
        "https://res.cloudinary.com/demo/raw/upload/fl_attachment/v1/resumes/jane_1.pdf"
    )]
    #[case("https://example.com/files/jane.pdf", "https://example.com/files/jane.pdf")]
    fn test_attachment_url(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(attachment_url(input), expected);
    }

    #[test]
    fn test_attachment_url_first_occurrence_only() {
        let url = "https://res.cloudinary.com/demo/raw/upload/v1/upload/x.pdf";
        assert_eq!(
            attachment_url(url),
            "https://res.cloudinary.com/demo/raw/upload/fl_attachment/v1/upload/x.pdf"
        );
    }

    #[test]
    fn test_provider_error_message() {
        assert_eq!(
            provider_error_message(r#"{"error":{"message":"Invalid signature"}}"#),
            "Invalid signature"
        );
        assert_eq!(provider_error_message("gateway timeout"), "gateway timeout");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Sanitized usernames only contain identifier-safe characters.
    proptest! {
        #[test]
        fn prop_sanitized_username_safe_chars(username in ".*") {
            let sanitized = sanitize_username(&username);

            prop_assert_eq!(sanitized.chars().count(), username.chars().count());
            for c in sanitized.chars() {
                prop_assert!(
                    c.is_ascii_alphanumeric() || c == '_',
                    "Unexpected character in sanitized username: {}",
                    c
                );
            }
        }
    }

    // Object keys live under the configured namespace and embed the instant,
    // so two uploads at different instants never collide.
    proptest! {
        #[test]
        fn prop_object_key_namespaced(
            username in "[a-zA-Z0-9 ._-]{1,32}",
            millis in 0i64..4_102_444_800_000,
        ) {
            let svc = StorageService::from_config(StorageConfig::new("demo", "key", "shhh"))
                .expect("should create service");
            let at = DateTime::from_timestamp_millis(millis).expect("valid timestamp");

            let key = svc.object_key(&username, at);
            let suffix = format!("_{millis}");
            prop_assert!(key.starts_with("resumes/"));
            prop_assert!(key.ends_with(&suffix));
        }
    }
}

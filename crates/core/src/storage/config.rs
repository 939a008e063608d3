//! Storage configuration types.

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Provider cloud name (tenant identifier in upload and delivery URLs).
    pub cloud_name: String,
    /// Provider API key.
    pub api_key: String,
    /// Provider API secret used for request signing.
    pub api_secret: String,
    /// Base URL of the provider's upload API.
    pub api_base: String,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Allowed MIME types for upload.
    pub allowed_mime_types: Vec<String>,
    /// Namespace prefix under which object keys are derived.
    pub key_prefix: String,
}

impl StorageConfig {
    /// Default max file size: 10MiB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
    /// Default upload API base URL.
    pub const DEFAULT_API_BASE: &'static str = "https://api.cloudinary.com";
    /// Default object key namespace.
    pub const DEFAULT_KEY_PREFIX: &'static str = "resumes";

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: Self::default_mime_types(),
            key_prefix: Self::DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set allowed MIME types.
    #[must_use]
    pub fn with_allowed_mime_types(mut self, types: Vec<String>) -> Self {
        self.allowed_mime_types = types;
        self
    }

    /// Set the object key namespace prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Override the upload API base URL.
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Default allowed MIME types.
    #[must_use]
    pub fn default_mime_types() -> Vec<String> {
        vec!["application/pdf".to_string()]
    }

    /// Check if a MIME type is allowed.
    #[must_use]
    pub fn is_mime_type_allowed(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|t| t == mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::new("demo", "key", "secret");
        assert_eq!(config.max_file_size, StorageConfig::DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.api_base, StorageConfig::DEFAULT_API_BASE);
        assert_eq!(config.key_prefix, "resumes");
        assert!(config.is_mime_type_allowed("application/pdf"));
    }

    #[test]
    fn test_mime_type_validation() {
        let config = StorageConfig::new("demo", "key", "secret");
        assert!(config.is_mime_type_allowed("application/pdf"));
        assert!(!config.is_mime_type_allowed("application/msword"));
        assert!(!config.is_mime_type_allowed("text/html"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = StorageConfig::new("demo", "key", "secret")
            .with_max_file_size(1024)
            .with_key_prefix("cv")
            .with_allowed_mime_types(vec!["image/png".to_string()]);
        assert_eq!(config.max_file_size, 1024);
        assert_eq!(config.key_prefix, "cv");
        assert!(config.is_mime_type_allowed("image/png"));
        assert!(!config.is_mime_type_allowed("application/pdf"));
    }
}

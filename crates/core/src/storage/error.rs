//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File size exceeds maximum allowed.
    #[error("file size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// MIME type not allowed.
    #[error("MIME type '{mime_type}' is not allowed")]
    InvalidMimeType {
        /// The invalid MIME type.
        mime_type: String,
    },

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The provider rejected the upload.
    #[error("storage provider returned HTTP {status}: {message}")]
    Provider {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error detail.
        message: String,
    },

    /// Transport-level failure talking to the provider.
    #[error("storage request failed: {0}")]
    Transport(String),
}

impl StorageError {
    /// Create a file too large error.
    #[must_use]
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Create an invalid MIME type error.
    #[must_use]
    pub fn invalid_mime_type(mime_type: impl Into<String>) -> Self {
        Self::InvalidMimeType {
            mime_type: mime_type.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a provider error.
    #[must_use]
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// True when the error is a client-side validation failure rather than a
    /// provider or transport fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::FileTooLarge { .. } | Self::InvalidMimeType { .. }
        )
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation() {
        assert!(StorageError::file_too_large(20, 10).is_validation());
        assert!(StorageError::invalid_mime_type("text/html").is_validation());
        assert!(!StorageError::provider(500, "boom").is_validation());
        assert!(!StorageError::Transport("timeout".into()).is_validation());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StorageError::file_too_large(20, 10).to_string(),
            "file size 20 bytes exceeds maximum allowed 10 bytes"
        );
        assert_eq!(
            StorageError::provider(401, "bad signature").to_string(),
            "storage provider returned HTTP 401: bad signature"
        );
    }
}

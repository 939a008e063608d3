//! Object storage client for a Cloudinary-style blob API.
//!
//! The provider exposes an HTTP upload endpoint per tenant ("cloud") and
//! serves stored objects from public delivery URLs. Uploads are authenticated
//! by signing the request parameters with the tenant's API secret.
//!
//! ```text
//! POST https://api.cloudinary.com/v1_1/{cloud_name}/raw/upload
//!   multipart: file, public_id, timestamp, api_key, signature, ...
//! -> { "secure_url": "...", "public_id": "..." }
//! ```

mod config;
mod error;
mod service;

pub use config::StorageConfig;
pub use error::StorageError;
pub use service::{
    ObjectStorage, StorageService, StoredObject, attachment_url, sanitize_username,
};

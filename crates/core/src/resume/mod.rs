//! Resume upload, download tracking, and stats operations.

mod error;
mod service;
mod types;

pub use error::ResumeError;
pub use service::{ResumeService, ResumeStore};
pub use types::{CreateResumeInput, ResumeRecord, UploadResumeInput};

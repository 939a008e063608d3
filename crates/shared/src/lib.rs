//! Shared errors and configuration for ResumeLink.
//!
//! This crate provides the common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

//! Repository implementations for data access.
//!
//! Repositories implement the persistence traits declared in the core crate,
//! hiding the `SeaORM` details from the rest of the application.

pub mod resume;

pub use resume::ResumeRepository;

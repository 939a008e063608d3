//! `SeaORM` entity definitions.

pub mod resumes;

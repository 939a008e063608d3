//! Initial migration: resume metadata records.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(RESUMES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS resumes CASCADE;")
            .await?;
        Ok(())
    }
}

const RESUMES_SQL: &str = r"
-- Resume metadata records. Rows are created once at upload, mutated only by
-- the view-count increment, and never deleted.
CREATE TABLE resumes (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username TEXT NOT NULL,
    resume_url TEXT NOT NULL,
    public_id TEXT NOT NULL UNIQUE,
    original_name TEXT NOT NULL,
    views BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_views_non_negative CHECK (views >= 0)
);

-- Index for listing a user's uploads, newest first
CREATE INDEX idx_resumes_username ON resumes(username, created_at DESC);
";

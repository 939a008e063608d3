//! Resume repository for database operations.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::resumes;
use resumelink_core::resume::{CreateResumeInput, ResumeError, ResumeRecord, ResumeStore};

/// Resume repository implementation.
#[derive(Debug)]
pub struct ResumeRepository {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepository {
    /// Create a new resume repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

impl ResumeStore for ResumeRepository {
    async fn create(&self, input: CreateResumeInput) -> Result<ResumeRecord, ResumeError> {
        let now = Utc::now();
        let active_model = resumes::ActiveModel {
            id: Set(input.id),
            username: Set(input.username),
            resume_url: Set(input.resume_url),
            public_id: Set(input.public_id),
            original_name: Set(input.original_name),
            views: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(|e| ResumeError::repository(e.to_string()))?;

        Ok(to_domain(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResumeRecord>, ResumeError> {
        let model = resumes::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ResumeError::repository(e.to_string()))?;

        Ok(model.map(to_domain))
    }

    async fn update_views(&self, id: Uuid, views: i64) -> Result<ResumeRecord, ResumeError> {
        let model = resumes::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ResumeError::repository(e.to_string()))?
            .ok_or_else(|| ResumeError::not_found(id))?;

        let mut active_model: resumes::ActiveModel = model.into();
        active_model.views = Set(views);
        active_model.updated_at = Set(Utc::now().into());

        let updated = active_model
            .update(&*self.db)
            .await
            .map_err(|e| ResumeError::repository(e.to_string()))?;

        Ok(to_domain(updated))
    }
}

/// Convert a database model to the domain type.
fn to_domain(model: resumes::Model) -> ResumeRecord {
    ResumeRecord {
        id: model.id,
        username: model.username,
        resume_url: model.resume_url,
        public_id: model.public_id,
        original_name: model.original_name,
        views: model.views,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: Uuid, views: i64) -> resumes::Model {
        let now = Utc::now().fixed_offset();
        resumes::Model {
            id,
            username: "jane_doe".to_string(),
            resume_url: "https://res.cloudinary.com/demo/raw/upload/v1/resumes/jane_doe_1.pdf"
                .to_string(),
            public_id: "resumes/jane_doe_1".to_string(),
            original_name: "resume.pdf".to_string(),
            views,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_returns_domain_record() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(id, 0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ResumeRepository::new(db);
        let record = repo
            .create(CreateResumeInput {
                id,
                username: "jane_doe".to_string(),
                resume_url:
                    "https://res.cloudinary.com/demo/raw/upload/v1/resumes/jane_doe_1.pdf"
                        .to_string(),
                public_id: "resumes/jane_doe_1".to_string(),
                original_name: "resume.pdf".to_string(),
            })
            .await
            .expect("should create");

        assert_eq!(record.id, id);
        assert_eq!(record.views, 0);
        assert_eq!(record.username, "jane_doe");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<resumes::Model>::new()])
            .into_connection();

        let repo = ResumeRepository::new(db);
        let found = repo.find_by_id(Uuid::new_v4()).await.expect("should query");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_views_persists_new_count() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(id, 0)], vec![model(id, 1)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ResumeRepository::new(db);
        let updated = repo.update_views(id, 1).await.expect("should update");
        assert_eq!(updated.views, 1);
    }

    #[tokio::test]
    async fn test_update_views_missing_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<resumes::Model>::new()])
            .into_connection();

        let repo = ResumeRepository::new(db);
        let err = repo.update_views(Uuid::new_v4(), 1).await.unwrap_err();
        assert!(matches!(err, ResumeError::NotFound(_)));
    }
}

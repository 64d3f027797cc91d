use std::sync::Arc;

use async_trait::async_trait;
use complaints_core_db::models::comment::CommentModel;
use complaints_core_db::repository::comment_repository::CommentRepository;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct CommentRepositoryImpl {
    pub(super) pool: Arc<PgPool>,
}

impl CommentRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CommentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CommentModel {
            id: row.try_get("id")?,
            complaint_id: row.try_get("complaint_id")?,
            author_person_id: row.try_get("author_person_id")?,
            is_admin: row.try_get("is_admin")?,
            body: get_heapless_string(row, "body")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(
        &self,
        comment: CommentModel,
    ) -> Result<CommentModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, comment).await
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<CommentModel>, Box<dyn Error + Send + Sync>> {
        Self::list_by_complaint_impl(self, complaint_id).await
    }
}

use complaints_core_db::models::comment::CommentModel;
use std::error::Error;

use super::repo_impl::CommentRepositoryImpl;

impl CommentRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CommentRepositoryImpl,
        comment: CommentModel,
    ) -> Result<CommentModel, Box<dyn Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO complaint_comment
            (id, complaint_id, author_person_id, is_admin, body, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id)
        .bind(comment.complaint_id)
        .bind(comment.author_person_id)
        .bind(comment.is_admin)
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .execute(repo.pool.as_ref())
        .await?;

        Ok(comment)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::comment::CommentModel;

/// Persistence contract for the append-only comment thread.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(
        &self,
        comment: CommentModel,
    ) -> Result<CommentModel, Box<dyn std::error::Error + Send + Sync>>;

    /// All comments on a complaint, ordered by creation time ascending.
    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<CommentModel>, Box<dyn std::error::Error + Send + Sync>>;
}

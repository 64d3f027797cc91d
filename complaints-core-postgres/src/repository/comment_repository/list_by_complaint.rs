use complaints_core_db::models::comment::CommentModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CommentRepositoryImpl;
use crate::utils::TryFromRow;

impl CommentRepositoryImpl {
    pub(super) async fn list_by_complaint_impl(
        repo: &CommentRepositoryImpl,
        complaint_id: Uuid,
    ) -> Result<Vec<CommentModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT id, complaint_id, author_person_id, is_admin, body, created_at
            FROM complaint_comment
            WHERE complaint_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(complaint_id)
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter().map(CommentModel::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::complaint_repository::test_utils::{
        create_test_complaint, create_test_principal,
    };
    use crate::test_helper::setup_test_repositories;
    use chrono::{Duration, Utc};
    use complaints_core_db::models::comment::CommentModel;
    use complaints_core_db::repository::comment_repository::CommentRepository;
    use complaints_core_db::repository::complaint_repository::ComplaintRepository;
    use complaints_core_db::repository::principal_repository::PrincipalRepository;
    use heapless::String as HeaplessString;
    use serial_test::serial;
    use std::str::FromStr;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn thread_is_ordered_by_creation_time(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repositories().await?;
        let principal_repo = repos.principal_repository();
        let complaint_repo = repos.complaint_repository();
        let comment_repo = repos.comment_repository();

        let owner = principal_repo.create(create_test_principal()).await?;
        let complaint = complaint_repo
            .create(create_test_complaint(owner.id))
            .await?
            .expect("fresh reference id");

        let earlier = CommentModel {
            id: Uuid::new_v4(),
            complaint_id: complaint.id,
            author_person_id: owner.id,
            is_admin: false,
            body: HeaplessString::from_str("first").unwrap(),
            created_at: Utc::now() - Duration::minutes(5),
        };
        let later = CommentModel {
            created_at: Utc::now(),
            body: HeaplessString::from_str("second").unwrap(),
            id: Uuid::new_v4(),
            ..earlier.clone()
        };
        // Insert newest first; the read side must still sort ascending.
        comment_repo.create(later.clone()).await?;
        comment_repo.create(earlier.clone()).await?;

        let thread = comment_repo.list_by_complaint(complaint.id).await?;
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].id, earlier.id);
        assert_eq!(thread[1].id, later.id);

        Ok(())
    }
}

use complaints_core_db::models::call_request::CallRequestModel;
use std::error::Error;

use super::repo_impl::{CallRequestRepositoryImpl, CALL_REQUEST_COLUMNS};
use crate::utils::TryFromRow;

impl CallRequestRepositoryImpl {
    /// The partial unique index on active rows makes the existence check
    /// atomic with the insert; a concurrent winner leaves us with no
    /// returned row.
    pub(super) async fn create_if_no_active_impl(
        repo: &CallRequestRepositoryImpl,
        request: CallRequestModel,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            INSERT INTO call_request
            (id, complaint_id, requester_person_id, status, notes, admin_notes,
             preferred_time, scheduled_time, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (complaint_id) WHERE status IN ('pending', 'scheduled') DO NOTHING
            RETURNING {CALL_REQUEST_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(request.id)
            .bind(request.complaint_id)
            .bind(request.requester_person_id)
            .bind(request.status)
            .bind(request.notes.as_deref())
            .bind(request.admin_notes.as_deref())
            .bind(request.preferred_time)
            .bind(request.scheduled_time)
            .bind(request.created_at)
            .bind(request.updated_at)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(CallRequestModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::complaint_repository::test_utils::{
        create_test_complaint, create_test_principal,
    };
    use crate::test_helper::{create_test_call_request, setup_test_repositories};
    use complaints_core_db::repository::call_request_repository::CallRequestRepository;
    use complaints_core_db::repository::complaint_repository::ComplaintRepository;
    use complaints_core_db::repository::principal_repository::PrincipalRepository;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn second_active_request_is_rejected(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repositories().await?;
        let principal_repo = repos.principal_repository();
        let complaint_repo = repos.complaint_repository();
        let call_repo = repos.call_request_repository();

        let owner = principal_repo.create(create_test_principal()).await?;
        let complaint = complaint_repo
            .create(create_test_complaint(owner.id))
            .await?
            .expect("fresh reference id");

        let first = call_repo
            .create_if_no_active(create_test_call_request(complaint.id, owner.id))
            .await?;
        assert!(first.is_some());

        let second = call_repo
            .create_if_no_active(create_test_call_request(complaint.id, owner.id))
            .await?;
        assert!(second.is_none());

        Ok(())
    }
}

use chrono::{DateTime, Utc};
use complaints_core_db::models::call_request::CallRequestModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{CallRequestRepositoryImpl, CALL_REQUEST_COLUMNS};
use crate::utils::TryFromRow;

// Each transition is a compare-and-set on the current status column, so a
// concurrent admin acting on the same request loses cleanly with `None`.
impl CallRequestRepositoryImpl {
    pub(super) async fn schedule_impl(
        repo: &CallRequestRepositoryImpl,
        id: Uuid,
        scheduled_time: DateTime<Utc>,
        admin_notes: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            UPDATE call_request
            SET status = 'scheduled', scheduled_time = $2, admin_notes = $3, updated_at = $4
            WHERE id = $1 AND status = 'pending'
            RETURNING {CALL_REQUEST_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(scheduled_time)
            .bind(admin_notes)
            .bind(updated_at)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        if row.is_none() {
            tracing::debug!(call_request_id = %id, "schedule skipped, request not pending");
        }
        row.as_ref().map(CallRequestModel::try_from_row).transpose()
    }

    pub(super) async fn complete_impl(
        repo: &CallRequestRepositoryImpl,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            UPDATE call_request
            SET status = 'completed', updated_at = $2
            WHERE id = $1 AND status = 'scheduled'
            RETURNING {CALL_REQUEST_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(updated_at)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(CallRequestModel::try_from_row).transpose()
    }

    pub(super) async fn cancel_impl(
        repo: &CallRequestRepositoryImpl,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            UPDATE call_request
            SET status = 'cancelled', updated_at = $2
            WHERE id = $1 AND status IN ('pending', 'scheduled')
            RETURNING {CALL_REQUEST_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(updated_at)
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
    use chrono::{Duration, Utc};
    use complaints_core_api::domain::call_request_status::CallRequestStatus;
    use complaints_core_db::repository::call_request_repository::CallRequestRepository;
    use complaints_core_db::repository::complaint_repository::ComplaintRepository;
    use complaints_core_db::repository::principal_repository::PrincipalRepository;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn pending_request_walks_to_completed(
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
        let request = call_repo
            .create_if_no_active(create_test_call_request(complaint.id, owner.id))
            .await?
            .expect("no active request yet");

        let slot = Utc::now() + Duration::days(1);
        let scheduled = call_repo
            .schedule(request.id, slot, Some("room 204"), Utc::now())
            .await?
            .expect("pending request is schedulable");
        assert_eq!(scheduled.status, CallRequestStatus::Scheduled);
        assert!(scheduled.scheduled_time.is_some());

        // A second schedule of the same request must lose the compare-and-set.
        let again = call_repo
            .schedule(request.id, slot, None, Utc::now())
            .await?;
        assert!(again.is_none());

        let completed = call_repo
            .complete(request.id, Utc::now())
            .await?
            .expect("scheduled request is completable");
        assert_eq!(completed.status, CallRequestStatus::Completed);

        // Terminal rows cannot be cancelled.
        assert!(call_repo.cancel(request.id, Utc::now()).await?.is_none());

        Ok(())
    }
}

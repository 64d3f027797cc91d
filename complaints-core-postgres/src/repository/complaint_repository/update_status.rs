use chrono::{DateTime, Utc};
use complaints_core_api::domain::ComplaintStatus;
use complaints_core_db::models::complaint::ComplaintModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    /// Compare-and-set on the status column: the row must still carry
    /// `expected` for the update to apply, so concurrent transitions
    /// serialize through the row lock and only one can win.
    pub(super) async fn update_status_impl(
        repo: &ComplaintRepositoryImpl,
        id: Uuid,
        expected: ComplaintStatus,
        target: ComplaintStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            UPDATE complaint
            SET status = $3, updated_at = $4
            WHERE id = $1 AND status = $2
            RETURNING {COMPLAINT_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(expected)
            .bind(target)
            .bind(updated_at)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        if row.is_none() {
            tracing::debug!(complaint_id = %id, expected = %expected, "status CAS missed");
        }
        row.as_ref().map(ComplaintModel::try_from_row).transpose()
    }
}

use complaints_core_db::models::call_request::CallRequestModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{CallRequestRepositoryImpl, CALL_REQUEST_COLUMNS};
use crate::utils::TryFromRow;

impl CallRequestRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &CallRequestRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!("SELECT {CALL_REQUEST_COLUMNS} FROM call_request WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(CallRequestModel::try_from_row).transpose()
    }

    pub(super) async fn find_active_by_complaint_impl(
        repo: &CallRequestRepositoryImpl,
        complaint_id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            SELECT {CALL_REQUEST_COLUMNS} FROM call_request
            WHERE complaint_id = $1 AND status IN ('pending', 'scheduled')
            "#
        );
        let row = sqlx::query(&sql)
            .bind(complaint_id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(CallRequestModel::try_from_row).transpose()
    }
}

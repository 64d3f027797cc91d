use complaints_core_db::models::complaint::ComplaintModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ComplaintRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!("SELECT {COMPLAINT_COLUMNS} FROM complaint WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;
        row.as_ref().map(ComplaintModel::try_from_row).transpose()
    }
}

use complaints_core_db::models::complaint::ComplaintModel;
use std::error::Error;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    /// Insert-if-absent on the reference id: the unique index is the final
    /// arbiter, so a candidate that raced past the service's pre-check
    /// comes back as `None` instead of a duplicate row.
    pub(super) async fn create_impl(
        repo: &ComplaintRepositoryImpl,
        complaint: ComplaintModel,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            INSERT INTO complaint
            (id, reference_id, title, description, category, priority, status,
             anonymous, attachment_urls, owner_person_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (reference_id) DO NOTHING
            RETURNING {COMPLAINT_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(complaint.id)
            .bind(complaint.reference_id.as_str())
            .bind(complaint.title.as_str())
            .bind(complaint.description.as_str())
            .bind(complaint.category.as_str())
            .bind(complaint.priority)
            .bind(complaint.status)
            .bind(complaint.anonymous)
            .bind(&complaint.attachment_urls)
            .bind(complaint.owner_person_id)
            .bind(complaint.created_at)
            .bind(complaint.updated_at)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(ComplaintModel::try_from_row).transpose()
    }

    pub(super) async fn exists_by_reference_id_impl(
        repo: &ComplaintRepositoryImpl,
        reference_id: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT 1 FROM complaint WHERE reference_id = $1")
            .bind(reference_id)
            .fetch_optional(repo.pool.as_ref())
            .await?;
        Ok(row.is_some())
    }
}

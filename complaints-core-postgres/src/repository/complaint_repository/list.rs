use complaints_core_api::domain::ComplaintFilters;
use complaints_core_db::models::complaint::ComplaintModel;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    /// Single statement with nullable filter binds; absent filters collapse
    /// to always-true clauses in the planner.
    pub(super) async fn list_impl(
        repo: &ComplaintRepositoryImpl,
        owner: Option<Uuid>,
        filters: &ComplaintFilters,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            SELECT {COMPLAINT_COLUMNS} FROM complaint
            WHERE ($1::uuid IS NULL OR owner_person_id = $1)
              AND ($2::complaint_status IS NULL OR status = $2)
              AND ($3::complaint_priority IS NULL OR priority = $3)
              AND ($4::varchar IS NULL OR category = $4)
              AND ($5::varchar IS NULL
                   OR title ILIKE '%' || $5 || '%'
                   OR description ILIKE '%' || $5 || '%'
                   OR reference_id ILIKE '%' || $5 || '%')
            ORDER BY created_at DESC
            "#
        );
        let rows = sqlx::query(&sql)
            .bind(owner)
            .bind(filters.status)
            .bind(filters.priority)
            .bind(filters.category.as_deref())
            .bind(filters.search.as_deref())
            .fetch_all(repo.pool.as_ref())
            .await?;

        rows.iter().map(ComplaintModel::try_from_row).collect()
    }
}

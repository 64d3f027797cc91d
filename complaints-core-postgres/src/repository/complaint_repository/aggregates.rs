use chrono::NaiveDate;
use complaints_core_api::domain::{ComplaintStatus, Priority};
use sqlx::Row;
use std::error::Error;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    /// Per-day submission counts; only days with at least one submission
    /// come back, the service zero-fills the rest.
    pub(super) async fn count_by_day_impl(
        repo: &ComplaintRepositoryImpl,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
            FROM complaint
            WHERE (created_at AT TIME ZONE 'UTC')::date BETWEEN $1 AND $2
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| Ok((row.try_get("day")?, row.try_get("count")?)))
            .collect()
    }

    pub(super) async fn count_by_status_impl(
        repo: &ComplaintRepositoryImpl,
    ) -> Result<Vec<(ComplaintStatus, i64)>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            "SELECT status, COUNT(*) AS count FROM complaint GROUP BY status ORDER BY status",
        )
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| Ok((row.try_get("status")?, row.try_get("count")?)))
            .collect()
    }

    pub(super) async fn count_by_category_impl(
        repo: &ComplaintRepositoryImpl,
    ) -> Result<Vec<(String, i64)>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            "SELECT category, COUNT(*) AS count FROM complaint GROUP BY category ORDER BY category",
        )
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| Ok((row.try_get("category")?, row.try_get("count")?)))
            .collect()
    }

    pub(super) async fn count_by_priority_impl(
        repo: &ComplaintRepositoryImpl,
    ) -> Result<Vec<(Priority, i64)>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            "SELECT priority, COUNT(*) AS count FROM complaint GROUP BY priority ORDER BY priority",
        )
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| Ok((row.try_get("priority")?, row.try_get("count")?)))
            .collect()
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use complaints_core_api::domain::{ComplaintFilters, ComplaintStatus, Priority};
use complaints_core_db::models::complaint::ComplaintModel;
use complaints_core_db::repository::complaint_repository::ComplaintRepository;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct ComplaintRepositoryImpl {
    pub(super) pool: Arc<PgPool>,
}

impl ComplaintRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Column list shared by every complaint query that returns full rows.
pub(super) const COMPLAINT_COLUMNS: &str = "id, reference_id, title, description, category, \
     priority, status, anonymous, attachment_urls, owner_person_id, created_at, updated_at";

impl TryFromRow<PgRow> for ComplaintModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ComplaintModel {
            id: row.try_get("id")?,
            reference_id: get_heapless_string(row, "reference_id")?,
            title: get_heapless_string(row, "title")?,
            description: get_heapless_string(row, "description")?,
            category: get_heapless_string(row, "category")?,
            priority: row.try_get("priority")?,
            status: row.try_get("status")?,
            anonymous: row.try_get("anonymous")?,
            attachment_urls: row.try_get("attachment_urls")?,
            owner_person_id: row.try_get("owner_person_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ComplaintRepository for ComplaintRepositoryImpl {
    async fn create(
        &self,
        complaint: ComplaintModel,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, complaint).await
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }

    async fn exists_by_reference_id(
        &self,
        reference_id: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exists_by_reference_id_impl(self, reference_id).await
    }

    async fn list(
        &self,
        owner: Option<Uuid>,
        filters: &ComplaintFilters,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::list_impl(self, owner, filters).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: ComplaintStatus,
        target: ComplaintStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::update_status_impl(self, id, expected, target, updated_at).await
    }

    async fn count_by_day(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, Box<dyn Error + Send + Sync>> {
        Self::count_by_day_impl(self, start, end).await
    }

    async fn count_by_status(
        &self,
    ) -> Result<Vec<(ComplaintStatus, i64)>, Box<dyn Error + Send + Sync>> {
        Self::count_by_status_impl(self).await
    }

    async fn count_by_category(
        &self,
    ) -> Result<Vec<(String, i64)>, Box<dyn Error + Send + Sync>> {
        Self::count_by_category_impl(self).await
    }

    async fn count_by_priority(
        &self,
    ) -> Result<Vec<(Priority, i64)>, Box<dyn Error + Send + Sync>> {
        Self::count_by_priority_impl(self).await
    }
}

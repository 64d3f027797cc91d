use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use complaints_core_db::models::call_request::CallRequestModel;
use complaints_core_db::repository::call_request_repository::CallRequestRepository;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_optional_heapless_string, TryFromRow};

pub struct CallRequestRepositoryImpl {
    pub(super) pool: Arc<PgPool>,
}

impl CallRequestRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Column list shared by every call-request query that returns full rows.
pub(super) const CALL_REQUEST_COLUMNS: &str = "id, complaint_id, requester_person_id, status, \
     notes, admin_notes, preferred_time, scheduled_time, created_at, updated_at";

impl TryFromRow<PgRow> for CallRequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CallRequestModel {
            id: row.try_get("id")?,
            complaint_id: row.try_get("complaint_id")?,
            requester_person_id: row.try_get("requester_person_id")?,
            status: row.try_get("status")?,
            notes: get_optional_heapless_string(row, "notes")?,
            admin_notes: get_optional_heapless_string(row, "admin_notes")?,
            preferred_time: row.try_get("preferred_time")?,
            scheduled_time: row.try_get("scheduled_time")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl CallRequestRepository for CallRequestRepositoryImpl {
    async fn create_if_no_active(
        &self,
        request: CallRequestModel,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::create_if_no_active_impl(self, request).await
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }

    async fn find_active_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::find_active_by_complaint_impl(self, complaint_id).await
    }

    async fn schedule(
        &self,
        id: Uuid,
        scheduled_time: DateTime<Utc>,
        admin_notes: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::schedule_impl(self, id, scheduled_time, admin_notes, updated_at).await
    }

    async fn complete(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::complete_impl(self, id, updated_at).await
    }

    async fn cancel(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::cancel_impl(self, id, updated_at).await
    }
}

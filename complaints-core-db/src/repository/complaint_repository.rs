use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use complaints_core_api::domain::{ComplaintFilters, ComplaintStatus, Priority};
use uuid::Uuid;

use crate::models::complaint::ComplaintModel;

/// Persistence contract for the complaint store.
///
/// Status changes go through `update_status`, a compare-and-set keyed on the
/// expected current status, so that concurrent transition requests cannot
/// both succeed.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Insert a new complaint unless its reference id is already taken.
    ///
    /// # Returns
    /// * `Ok(Some(complaint))` - The stored row
    /// * `Ok(None)` - The reference id collided with an existing row
    async fn create(
        &self,
        complaint: ComplaintModel,
    ) -> Result<Option<ComplaintModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ComplaintModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn exists_by_reference_id(
        &self,
        reference_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// List complaints, newest first.
    ///
    /// `owner` scopes the result to a single principal's complaints; `None`
    /// lists across all owners (staff view).
    async fn list(
        &self,
        owner: Option<Uuid>,
        filters: &ComplaintFilters,
    ) -> Result<Vec<ComplaintModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Compare-and-set status update.
    ///
    /// # Returns
    /// * `Ok(Some(complaint))` - The row was in `expected` status and now
    ///   carries `target` with a fresh `updated_at`
    /// * `Ok(None)` - The row is missing or no longer in `expected` status
    async fn update_status(
        &self,
        id: Uuid,
        expected: ComplaintStatus,
        target: ComplaintStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ComplaintModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Per-day submission counts within `[start, end]`, only for days with
    /// at least one submission.
    async fn count_by_day(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, Box<dyn std::error::Error + Send + Sync>>;

    async fn count_by_status(
        &self,
    ) -> Result<Vec<(ComplaintStatus, i64)>, Box<dyn std::error::Error + Send + Sync>>;

    async fn count_by_category(
        &self,
    ) -> Result<Vec<(String, i64)>, Box<dyn std::error::Error + Send + Sync>>;

    async fn count_by_priority(
        &self,
    ) -> Result<Vec<(Priority, i64)>, Box<dyn std::error::Error + Send + Sync>>;
}

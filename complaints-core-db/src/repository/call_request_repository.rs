use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::call_request::CallRequestModel;

/// Persistence contract for the call-request workflow.
///
/// Every state change is a compare-and-set conditioned on the current
/// status, and the single-active-request invariant is enforced atomically
/// with the insert itself (not coordinated with the parent complaint).
#[async_trait]
pub trait CallRequestRepository: Send + Sync {
    /// Insert a new pending request unless the complaint already has a
    /// non-terminal one.
    ///
    /// # Returns
    /// * `Ok(Some(request))` - The stored row
    /// * `Ok(None)` - An active request already exists for the complaint
    async fn create_if_no_active(
        &self,
        request: CallRequestModel,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// The current non-terminal request for a complaint, if any.
    async fn find_active_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// `pending -> scheduled`, setting the staff-confirmed time and notes.
    /// Returns `None` when the row is missing or not pending.
    async fn schedule(
        &self,
        id: Uuid,
        scheduled_time: DateTime<Utc>,
        admin_notes: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// `scheduled -> completed`. Returns `None` when the row is missing or
    /// not scheduled.
    async fn complete(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// `pending|scheduled -> cancelled`. Returns `None` when the row is
    /// missing or already terminal.
    async fn cancel(
        &self,
        id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CallRequestModel>, Box<dyn std::error::Error + Send + Sync>>;
}

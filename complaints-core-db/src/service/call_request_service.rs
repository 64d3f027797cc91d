use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use complaints_core_api::domain::{
    AuthContext, CallRequestStatus, NewCallRequest, ScheduleCallRequest,
};
use complaints_core_api::error::{CoreError, CoreResult};
use heapless::String as HeaplessString;
use uuid::Uuid;
use validator::Validate;

use crate::models::call_request::CallRequestModel;
use crate::models::complaint::ComplaintModel;
use crate::repository::call_request_repository::CallRequestRepository;
use crate::repository::complaint_repository::ComplaintRepository;
use crate::service::access;

/// The call-request workflow: a state machine parallel to the complaint
/// lifecycle, with at most one non-terminal request per complaint.
pub struct CallRequestService {
    calls: Arc<dyn CallRequestRepository>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl CallRequestService {
    pub fn new(
        calls: Arc<dyn CallRequestRepository>,
        complaints: Arc<dyn ComplaintRepository>,
    ) -> Self {
        Self { calls, complaints }
    }

    async fn readable_complaint(
        &self,
        ctx: &AuthContext,
        complaint_id: Uuid,
    ) -> CoreResult<ComplaintModel> {
        let complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("complaint not found".into()))?;
        access::ensure_read(ctx, &complaint)?;
        Ok(complaint)
    }

    /// Request a call on a complaint. Only the complaint owner may request;
    /// the single-active-request invariant is enforced atomically with the
    /// insert.
    pub async fn create(
        &self,
        ctx: &AuthContext,
        complaint_id: Uuid,
        input: NewCallRequest,
    ) -> CoreResult<CallRequestModel> {
        let complaint = self.readable_complaint(ctx, complaint_id).await?;
        if ctx.principal_id != complaint.owner_person_id {
            return Err(CoreError::Forbidden(
                "only the complaint owner may request a call".into(),
            ));
        }

        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let notes = input
            .notes
            .as_deref()
            .map(HeaplessString::from_str)
            .transpose()
            .map_err(|_| CoreError::Validation("notes too long".into()))?;

        let now = Utc::now();
        let request = CallRequestModel {
            id: Uuid::new_v4(),
            complaint_id,
            requester_person_id: ctx.principal_id,
            status: CallRequestStatus::Pending,
            notes,
            admin_notes: None,
            preferred_time: input.preferred_time,
            scheduled_time: None,
            created_at: now,
            updated_at: now,
        };
        match self
            .calls
            .create_if_no_active(request)
            .await
            .map_err(super::db_err)?
        {
            Some(stored) => {
                tracing::info!(
                    complaint_id = %complaint_id,
                    call_request_id = %stored.id,
                    "call requested"
                );
                Ok(stored)
            }
            None => Err(CoreError::Conflict(
                "an active call request already exists for this complaint".into(),
            )),
        }
    }

    /// Cancel a pending or scheduled request. Allowed for the original
    /// requester and for staff.
    pub async fn cancel(&self, ctx: &AuthContext, id: Uuid) -> CoreResult<CallRequestModel> {
        let request = self
            .calls
            .find_by_id(id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("call request not found".into()))?;
        // Visibility follows the parent complaint.
        self.readable_complaint(ctx, request.complaint_id).await?;

        if !ctx.is_admin() && ctx.principal_id != request.requester_person_id {
            return Err(CoreError::Forbidden(
                "only the requester or staff may cancel a call request".into(),
            ));
        }

        self.calls
            .cancel(id, Utc::now())
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::invalid_transition(request.status, CallRequestStatus::Cancelled))
    }

    /// Staff-only: confirm a time for a pending request.
    pub async fn schedule(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        input: ScheduleCallRequest,
    ) -> CoreResult<CallRequestModel> {
        if !ctx.is_admin() {
            return Err(CoreError::Forbidden(
                "only staff may schedule call requests".into(),
            ));
        }
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let request = self
            .calls
            .find_by_id(id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("call request not found".into()))?;

        self.calls
            .schedule(
                id,
                input.scheduled_time,
                input.admin_notes.as_deref(),
                Utc::now(),
            )
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::invalid_transition(request.status, CallRequestStatus::Scheduled))
    }

    /// Staff-only: mark a scheduled call as held.
    pub async fn complete(&self, ctx: &AuthContext, id: Uuid) -> CoreResult<CallRequestModel> {
        if !ctx.is_admin() {
            return Err(CoreError::Forbidden(
                "only staff may complete call requests".into(),
            ));
        }
        let request = self
            .calls
            .find_by_id(id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("call request not found".into()))?;

        self.calls
            .complete(id, Utc::now())
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::invalid_transition(request.status, CallRequestStatus::Completed))
    }

    /// The current non-terminal request for a complaint, if any.
    pub async fn get_active(
        &self,
        ctx: &AuthContext,
        complaint_id: Uuid,
    ) -> CoreResult<Option<CallRequestModel>> {
        self.readable_complaint(ctx, complaint_id).await?;
        self.calls
            .find_active_by_complaint(complaint_id)
            .await
            .map_err(super::db_err)
    }
}

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use complaints_core_api::domain::{
    is_recognized_category, AuthContext, ComplaintFilters, ComplaintStatus, NewComplaint, Priority,
    Role,
};
use complaints_core_api::error::{CoreError, CoreResult};
use heapless::String as HeaplessString;
use uuid::Uuid;
use validator::Validate;

use crate::models::complaint::ComplaintModel;
use crate::repository::complaint_repository::ComplaintRepository;
use crate::service::access;
use crate::service::reference::ReferenceIdGenerator;

/// Retries for the rare case where a minted reference id is inserted by a
/// concurrent creation between the pre-check and our own insert.
const CREATE_ATTEMPTS: usize = 3;

/// The complaint store: creation, the status state machine, reads and
/// listing, all behind the access gate.
pub struct ComplaintService {
    complaints: Arc<dyn ComplaintRepository>,
    reference_ids: ReferenceIdGenerator,
}

impl ComplaintService {
    pub fn new(complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self {
            complaints,
            reference_ids: ReferenceIdGenerator::new(),
        }
    }

    /// File a new complaint on behalf of the student principal in `ctx`.
    pub async fn create(
        &self,
        ctx: &AuthContext,
        input: NewComplaint,
    ) -> CoreResult<ComplaintModel> {
        if ctx.role != Role::Student {
            return Err(CoreError::Forbidden(
                "only student principals may file complaints".into(),
            ));
        }

        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if !is_recognized_category(&input.category) {
            return Err(CoreError::Validation(format!(
                "unrecognized category '{}'",
                input.category
            )));
        }
        let priority = Priority::from_str(&input.priority)
            .map_err(|_| CoreError::Validation(format!("unrecognized priority '{}'", input.priority)))?;

        let title = HeaplessString::from_str(&input.title)
            .map_err(|_| CoreError::Validation("title too long".into()))?;
        let description = HeaplessString::from_str(&input.description)
            .map_err(|_| CoreError::Validation("description too long".into()))?;
        let category = HeaplessString::from_str(&input.category)
            .map_err(|_| CoreError::Validation("category too long".into()))?;

        for _ in 0..CREATE_ATTEMPTS {
            let reference_id = self.reference_ids.mint(self.complaints.as_ref()).await?;
            let now = Utc::now();
            let model = ComplaintModel {
                id: Uuid::new_v4(),
                reference_id: HeaplessString::from_str(&reference_id)
                    .map_err(|_| CoreError::Internal("reference id exceeds column width".into()))?,
                title: title.clone(),
                description: description.clone(),
                category: category.clone(),
                priority,
                status: ComplaintStatus::New,
                anonymous: input.anonymous,
                attachment_urls: input.attachment_urls.clone(),
                owner_person_id: ctx.principal_id,
                created_at: now,
                updated_at: now,
            };
            match self.complaints.create(model).await.map_err(super::db_err)? {
                Some(stored) => {
                    tracing::info!(
                        complaint_id = %stored.id,
                        reference_id = %stored.reference_id,
                        "complaint filed"
                    );
                    return Ok(stored);
                }
                // Lost the insert race on the reference id; mint a new one.
                None => continue,
            }
        }
        Err(CoreError::Generation(
            "reference id kept colliding at insert".into(),
        ))
    }

    /// Fetch one complaint, reporting denial as not-found.
    pub async fn get(&self, ctx: &AuthContext, id: Uuid) -> CoreResult<ComplaintModel> {
        let complaint = self
            .complaints
            .find_by_id(id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("complaint not found".into()))?;
        access::ensure_read(ctx, &complaint)?;
        Ok(complaint)
    }

    /// List complaints visible to the caller, newest first.
    pub async fn list(
        &self,
        ctx: &AuthContext,
        filters: &ComplaintFilters,
    ) -> CoreResult<Vec<ComplaintModel>> {
        let owner = if ctx.is_admin() {
            None
        } else {
            Some(ctx.principal_id)
        };
        self.complaints
            .list(owner, filters)
            .await
            .map_err(super::db_err)
    }

    /// Move a complaint along the status state machine.
    ///
    /// Admins may take any allowed edge; the owner may only reopen from
    /// `resolved`/`closed`. The update is a compare-and-set, so of two
    /// concurrent requests for the same edge only one succeeds.
    pub async fn transition(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        target: ComplaintStatus,
    ) -> CoreResult<ComplaintModel> {
        let complaint = self.get(ctx, id).await?;
        let current = complaint.status;

        if !ctx.is_admin() {
            let owner_reopen = ctx.principal_id == complaint.owner_person_id
                && target == ComplaintStatus::Reopened
                && current.is_reopenable();
            if !owner_reopen {
                return Err(CoreError::Forbidden(
                    "only staff may change complaint status".into(),
                ));
            }
        }

        if !current.can_transition_to(target) {
            return Err(CoreError::invalid_transition(current, target));
        }

        match self
            .complaints
            .update_status(id, current, target, Utc::now())
            .await
            .map_err(super::db_err)?
        {
            Some(updated) => {
                tracing::info!(
                    complaint_id = %id,
                    from = %current,
                    to = %target,
                    "complaint status changed"
                );
                Ok(updated)
            }
            // Another transition won the race; the edge we validated no
            // longer starts from the stored status.
            None => Err(CoreError::invalid_transition(current, target)),
        }
    }
}

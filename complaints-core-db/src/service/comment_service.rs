use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use complaints_core_api::domain::{AuthContext, NewComment};
use complaints_core_api::error::{CoreError, CoreResult};
use heapless::String as HeaplessString;
use uuid::Uuid;
use validator::Validate;

use crate::models::comment::CommentModel;
use crate::repository::comment_repository::CommentRepository;
use crate::repository::complaint_repository::ComplaintRepository;
use crate::service::access;

/// The append-only comment thread attached to a complaint.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        complaints: Arc<dyn ComplaintRepository>,
    ) -> Self {
        Self {
            comments,
            complaints,
        }
    }

    /// Append a comment. The author's role is stamped into the row at write
    /// time and not re-derived later. Gate denial takes precedence over
    /// input validation.
    pub async fn add(
        &self,
        ctx: &AuthContext,
        complaint_id: Uuid,
        input: NewComment,
    ) -> CoreResult<CommentModel> {
        let complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("complaint not found".into()))?;
        if !access::can_read(ctx, &complaint) {
            return Err(CoreError::Forbidden(
                "no access to the parent complaint".into(),
            ));
        }

        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let comment = CommentModel {
            id: Uuid::new_v4(),
            complaint_id,
            author_person_id: ctx.principal_id,
            is_admin: ctx.is_admin(),
            body: HeaplessString::from_str(&input.body)
                .map_err(|_| CoreError::Validation("comment body too long".into()))?,
            created_at: Utc::now(),
        };
        let stored = self
            .comments
            .create(comment)
            .await
            .map_err(super::db_err)?;
        tracing::debug!(
            complaint_id = %complaint_id,
            comment_id = %stored.id,
            is_admin = stored.is_admin,
            "comment added"
        );
        Ok(stored)
    }

    /// Comments on a complaint, creation-time ascending. An empty thread is
    /// an empty list, not an error.
    pub async fn list(
        &self,
        ctx: &AuthContext,
        complaint_id: Uuid,
    ) -> CoreResult<Vec<CommentModel>> {
        let complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("complaint not found".into()))?;
        access::ensure_read(ctx, &complaint)?;

        self.comments
            .list_by_complaint(complaint_id)
            .await
            .map_err(super::db_err)
    }
}

use chrono::{DateTime, Utc};
use complaints_core_api::domain::{AuthContext, ComplaintStatus, Priority};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a filed complaint.
///
/// The complaint store exclusively owns these rows; comments and call
/// requests hold non-owning `complaint_id` back-references. Rows are never
/// hard-deleted in normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintModel {
    pub id: Uuid,

    /// Human-readable ticket code, globally unique, assigned exactly once
    /// at creation.
    pub reference_id: HeaplessString<20>,

    pub title: HeaplessString<200>,
    pub description: HeaplessString<1000>,

    /// Open string set; validated against the recognized taxonomies at
    /// intake, stored verbatim.
    pub category: HeaplessString<50>,

    pub priority: Priority,
    pub status: ComplaintStatus,

    /// Suppresses owner identity in views exposed to other students, never
    /// to staff. Does not affect who may access the row.
    pub anonymous: bool,

    /// Opaque storage URLs for uploaded attachments, in upload order.
    pub attachment_urls: Vec<String>,

    /// Owning principal; immutable after creation.
    pub owner_person_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ComplaintModel {
    /// Owner identity as it may be shown to `viewer`.
    ///
    /// Staff and the owner always see the owner; for anyone else an
    /// anonymous complaint hides it.
    pub fn owner_visible_to(&self, viewer: &AuthContext) -> Option<Uuid> {
        if viewer.is_admin() || viewer.principal_id == self.owner_person_id || !self.anonymous {
            Some(self.owner_person_id)
        } else {
            None
        }
    }
}

impl Identifiable for ComplaintModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

use chrono::{DateTime, Utc};
use complaints_core_api::domain::CallRequestStatus;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a synchronous-call request tied to a complaint.
///
/// A complaint may accumulate many terminal rows but holds at most one
/// non-terminal row at a time; the requester is always the owning
/// complaint's owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequestModel {
    pub id: Uuid,

    /// Owning complaint (non-owning back-reference).
    pub complaint_id: Uuid,

    pub requester_person_id: Uuid,

    pub status: CallRequestStatus,

    /// Requester-supplied context for the call.
    pub notes: Option<HeaplessString<500>>,

    /// Staff-supplied notes, set at scheduling.
    pub admin_notes: Option<HeaplessString<500>>,

    /// Requester hint only.
    pub preferred_time: Option<DateTime<Utc>>,

    /// Staff-confirmed time, set when the request moves to `scheduled`.
    pub scheduled_time: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CallRequestModel {
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Identifiable for CallRequestModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

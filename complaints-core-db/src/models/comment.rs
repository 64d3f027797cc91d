use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a comment on a complaint.
///
/// Comments are append-only; they are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentModel {
    pub id: Uuid,

    /// Owning complaint (non-owning back-reference).
    pub complaint_id: Uuid,

    pub author_person_id: Uuid,

    /// Denormalized from the author's role at write time, so historical
    /// comments reflect the role held when posting.
    pub is_admin: bool,

    pub body: HeaplessString<1000>,

    pub created_at: DateTime<Utc>,
}

impl Identifiable for CommentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

use chrono::{DateTime, Utc};
use complaints_core_api::domain::Role;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for an authenticated principal and its role.
///
/// The role is assigned once at registration and is not
/// self-service-changeable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalModel {
    pub id: Uuid,

    pub display_name: HeaplessString<100>,

    pub phone: Option<HeaplessString<20>>,

    /// Institutional identifier, when the principal is a student.
    pub student_number: Option<HeaplessString<20>>,

    pub role: Role,

    pub created_at: DateTime<Utc>,
}

impl Identifiable for PrincipalModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

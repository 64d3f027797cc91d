use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Resolved authenticated principal, passed explicitly into every core
/// operation.
///
/// Established at request start from the principal record and discarded at
/// request end; the core never reads ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub principal_id: Uuid,
    pub role: Role,
}

impl AuthContext {
    pub fn new(principal_id: Uuid, role: Role) -> Self {
        Self { principal_id, role }
    }

    pub fn admin(principal_id: Uuid) -> Self {
        Self::new(principal_id, Role::Admin)
    }

    pub fn student(principal_id: Uuid) -> Self {
        Self::new(principal_id, Role::Student)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

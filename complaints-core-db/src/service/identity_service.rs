use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use complaints_core_api::domain::{AuthContext, Role};
use complaints_core_api::error::{CoreError, CoreResult};
use heapless::String as HeaplessString;
use uuid::Uuid;

use crate::models::principal::PrincipalModel;
use crate::repository::principal_repository::PrincipalRepository;

/// Resolves authenticated principals to their identity and role.
///
/// The credential exchange itself happens outside the core; this service
/// only turns an already-authenticated principal id into the explicit
/// context every operation receives.
pub struct IdentityService {
    principals: Arc<dyn PrincipalRepository>,
}

impl IdentityService {
    pub fn new(principals: Arc<dyn PrincipalRepository>) -> Self {
        Self { principals }
    }

    pub async fn resolve(&self, principal_id: Uuid) -> CoreResult<AuthContext> {
        let principal = self
            .principals
            .find_by_id(principal_id)
            .await
            .map_err(super::db_err)?
            .ok_or_else(|| CoreError::NotFound("principal not found".into()))?;
        Ok(AuthContext::new(principal.id, principal.role))
    }

    /// Register a principal. The role is fixed here and never changed
    /// through self-service.
    pub async fn register(
        &self,
        display_name: &str,
        phone: Option<&str>,
        student_number: Option<&str>,
        role: Role,
    ) -> CoreResult<PrincipalModel> {
        if display_name.trim().is_empty() {
            return Err(CoreError::Validation("display name is required".into()));
        }
        let principal = PrincipalModel {
            id: Uuid::new_v4(),
            display_name: HeaplessString::from_str(display_name)
                .map_err(|_| CoreError::Validation("display name too long".into()))?,
            phone: phone
                .map(HeaplessString::from_str)
                .transpose()
                .map_err(|_| CoreError::Validation("phone too long".into()))?,
            student_number: student_number
                .map(HeaplessString::from_str)
                .transpose()
                .map_err(|_| CoreError::Validation("student number too long".into()))?,
            role,
            created_at: Utc::now(),
        };
        self.principals
            .create(principal)
            .await
            .map_err(super::db_err)
    }
}

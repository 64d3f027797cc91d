use async_trait::async_trait;
use uuid::Uuid;

use crate::models::principal::PrincipalModel;

/// Persistence contract for principals and their roles.
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    async fn create(
        &self,
        principal: PrincipalModel,
    ) -> Result<PrincipalModel, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PrincipalModel>, Box<dyn std::error::Error + Send + Sync>>;
}

use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::call_request_repository::CallRequestRepositoryImpl;
use crate::repository::comment_repository::CommentRepositoryImpl;
use crate::repository::complaint_repository::ComplaintRepositoryImpl;
use crate::repository::principal_repository::PrincipalRepositoryImpl;

/// Factory for the PostgreSQL-backed repositories, all sharing one pool.
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn complaint_repository(&self) -> ComplaintRepositoryImpl {
        ComplaintRepositoryImpl::new(self.pool.clone())
    }

    pub fn comment_repository(&self) -> CommentRepositoryImpl {
        CommentRepositoryImpl::new(self.pool.clone())
    }

    pub fn call_request_repository(&self) -> CallRequestRepositoryImpl {
        CallRequestRepositoryImpl::new(self.pool.clone())
    }

    pub fn principal_repository(&self) -> PrincipalRepositoryImpl {
        PrincipalRepositoryImpl::new(self.pool.clone())
    }
}

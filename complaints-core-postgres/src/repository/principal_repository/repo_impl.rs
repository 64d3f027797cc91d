use std::sync::Arc;

use async_trait::async_trait;
use complaints_core_db::models::principal::PrincipalModel;
use complaints_core_db::repository::principal_repository::PrincipalRepository;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct PrincipalRepositoryImpl {
    pool: Arc<PgPool>,
}

impl PrincipalRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const PRINCIPAL_COLUMNS: &str = "id, display_name, phone, student_number, role, created_at";

impl TryFromRow<PgRow> for PrincipalModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PrincipalModel {
            id: row.try_get("id")?,
            display_name: get_heapless_string(row, "display_name")?,
            phone: get_optional_heapless_string(row, "phone")?,
            student_number: get_optional_heapless_string(row, "student_number")?,
            role: row.try_get("role")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl PrincipalRepository for PrincipalRepositoryImpl {
    async fn create(
        &self,
        principal: PrincipalModel,
    ) -> Result<PrincipalModel, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            r#"
            INSERT INTO principal (id, display_name, phone, student_number, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRINCIPAL_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(principal.id)
            .bind(principal.display_name.as_str())
            .bind(principal.phone.as_deref())
            .bind(principal.student_number.as_deref())
            .bind(principal.role)
            .bind(principal.created_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        PrincipalModel::try_from_row(&row)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PrincipalModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!("SELECT {PRINCIPAL_COLUMNS} FROM principal WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.as_ref().map(PrincipalModel::try_from_row).transpose()
    }
}

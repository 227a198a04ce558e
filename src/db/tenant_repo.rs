// src/db/tenant_repo.rs

use sqlx::PgPool;
use uuid::Uuid;
use crate::{common::error::AppError, models::tenant::TenantRecord};

// O id sai como texto: o modelo trata o identificador como opaco.
const TENANT_COLUMNS: &str = r#"
    id::text AS id, name, email, phone, property, room_number,
    lease_start_date, lease_end_date, rent_amount
"#;

// Repositório de inquilinos (somente leitura para este serviço)
#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<TenantRecord>, AppError> {
        let tenants = sqlx::query_as::<_, TenantRecord>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants ORDER BY property ASC, room_number ASC"
        ))
            .fetch_all(&self.pool)
            .await?;
        Ok(tenants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TenantRecord>, AppError> {
        let tenant = sqlx::query_as::<_, TenantRecord>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }
}

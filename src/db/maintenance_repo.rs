// src/db/maintenance_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::{
        maintenance::{MaintenanceRequest, MaintenanceWithTenant, TenantContact, UpdateMaintenancePayload},
        tenant::TenantRecord,
    },
};

// Linha do LEFT JOIN com os contatos do inquilino
#[derive(FromRow)]
struct MaintenanceRow {
    id: Uuid,
    tenant_id: Uuid,
    tenant_name: String,
    property: String,
    room_number: String,
    description: String,
    priority: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
}

impl From<MaintenanceRow> for MaintenanceWithTenant {
    fn from(row: MaintenanceRow) -> Self {
        // Inquilino removido depois do chamado: sem contato
        let tenant = match (row.contact_name, row.contact_email, row.contact_phone) {
            (Some(name), Some(email), Some(phone)) => Some(TenantContact { name, email, phone }),
            _ => None,
        };
        MaintenanceWithTenant {
            request: MaintenanceRequest {
                id: row.id,
                tenant_id: row.tenant_id,
                tenant_name: row.tenant_name,
                property: row.property,
                room_number: row.room_number,
                description: row.description,
                priority: row.priority,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            tenant,
        }
    }
}

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_tenants(&self) -> Result<Vec<MaintenanceWithTenant>, AppError> {
        let rows = sqlx::query_as::<_, MaintenanceRow>(
            r#"
            SELECT m.*, t.name AS contact_name, t.email AS contact_email, t.phone AS contact_phone
            FROM maintenance_requests m
            LEFT JOIN tenants t ON t.id = m.tenant_id
            ORDER BY m.created_at DESC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(MaintenanceWithTenant::from).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceWithTenant>, AppError> {
        let row = sqlx::query_as::<_, MaintenanceRow>(
            r#"
            SELECT m.*, t.name AS contact_name, t.email AS contact_email, t.phone AS contact_phone
            FROM maintenance_requests m
            LEFT JOIN tenants t ON t.id = m.tenant_id
            WHERE m.id = $1
            "#,
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(MaintenanceWithTenant::from))
    }

    /// Abre o chamado copiando nome e localização do inquilino.
    pub async fn create(
        &self,
        tenant_id: Uuid,
        tenant: &TenantRecord,
        description: &str,
        priority: &str,
    ) -> Result<MaintenanceRequest, AppError> {
        let created = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (tenant_id, tenant_name, property, room_number, description, priority, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending')
            RETURNING *
            "#,
        )
            .bind(tenant_id)
            .bind(&tenant.name)
            .bind(&tenant.property)
            .bind(&tenant.room_number)
            .bind(description)
            .bind(priority)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    // Atualização parcial: campos ausentes mantêm o valor atual
    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateMaintenancePayload,
    ) -> Result<Option<MaintenanceRequest>, AppError> {
        let updated = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests SET
                description = COALESCE($2, description),
                priority = COALESCE($3, priority),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
            .bind(id)
            .bind(input.description.as_deref())
            .bind(input.priority.as_deref())
            .bind(input.status.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<MaintenanceRequest>, AppError> {
        let deleted = sqlx::query_as::<_, MaintenanceRequest>(
            "DELETE FROM maintenance_requests WHERE id = $1 RETURNING *",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }
}

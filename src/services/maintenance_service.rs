// src/services/maintenance_service.rs

use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::{MaintenanceRepository, TenantRepository},
    models::maintenance::{
        CreateMaintenancePayload, MaintenanceRequest, MaintenanceWithTenant, UpdateMaintenancePayload,
    },
};

#[derive(Clone)]
pub struct MaintenanceService {
    repo: MaintenanceRepository,
    tenant_repo: TenantRepository,
}

impl MaintenanceService {
    pub fn new(repo: MaintenanceRepository, tenant_repo: TenantRepository) -> Self {
        Self { repo, tenant_repo }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceWithTenant>, AppError> {
        self.repo.list_with_tenants().await
    }

    pub async fn get(&self, id: Uuid) -> Result<MaintenanceWithTenant, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MaintenanceNotFound)
    }

    /// LÓGICA DE NEGÓCIO: o chamado nasce "pending" e carrega nome, prédio e quarto
    /// do inquilino no momento da abertura.
    pub async fn open(&self, input: &CreateMaintenancePayload) -> Result<MaintenanceRequest, AppError> {
        let tenant = self
            .tenant_repo
            .find_by_id(input.tenant_id)
            .await?
            .ok_or(AppError::TenantNotFound)?;

        let created = self
            .repo
            .create(input.tenant_id, &tenant, &input.description, &input.priority)
            .await?;

        tracing::info!(
            "🔧 Chamado {} aberto para o quarto {} ({})",
            created.id,
            created.room_number,
            created.property
        );
        Ok(created)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateMaintenancePayload,
    ) -> Result<MaintenanceRequest, AppError> {
        self.repo
            .update(id, input)
            .await?
            .ok_or(AppError::MaintenanceNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<MaintenanceRequest, AppError> {
        self.repo
            .delete(id)
            .await?
            .ok_or(AppError::MaintenanceNotFound)
    }
}

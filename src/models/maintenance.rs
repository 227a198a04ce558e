// src/models/maintenance.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Os valores aceitos são os mesmos que a coluna aceita (CHECK na migração).
pub const PRIORITIES: [&str; 3] = ["low", "medium", "high"];
pub const STATUSES: [&str; 3] = ["pending", "in_progress", "completed"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub tenant_id: Uuid,

    // Copiados do inquilino no momento da abertura do chamado
    #[schema(example = "Maria Santos")]
    pub tenant_name: String,
    #[schema(example = "Jade")]
    pub property: String,
    #[schema(example = "205")]
    pub room_number: String,

    #[schema(example = "Torneira do banheiro vazando")]
    pub description: String,
    #[schema(example = "high")]
    pub priority: String,
    #[schema(example = "pending")]
    pub status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de contato do inquilino anexados na listagem (o "populate")
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWithTenant {
    #[serde(flatten)]
    pub request: MaintenanceRequest,
    pub tenant: Option<TenantContact>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenancePayload {
    pub tenant_id: Uuid,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[validate(custom(function = "validate_priority"))]
    #[schema(example = "medium")]
    pub priority: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenancePayload {
    #[validate(length(min = 1, message = "A descrição não pode ficar vazia."))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,

    #[validate(custom(function = "validate_status"))]
    #[schema(example = "in_progress")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedMaintenance {
    pub message: String,
    pub maintenance: MaintenanceRequest,
}

fn validate_priority(value: &str) -> Result<(), validator::ValidationError> {
    if PRIORITIES.contains(&value) {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("priority");
    err.message = Some("Prioridade deve ser low, medium ou high.".into());
    Err(err)
}

fn validate_status(value: &str) -> Result<(), validator::ValidationError> {
    if STATUSES.contains(&value) {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("status");
    err.message = Some("Status deve ser pending, in_progress ou completed.".into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_rejects_unknown_priority() {
        let payload = CreateMaintenancePayload {
            tenant_id: Uuid::new_v4(),
            description: "Lâmpada queimada".into(),
            priority: "urgent".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("priority"));
    }

    #[test]
    fn test_create_payload_requires_description() {
        let payload = CreateMaintenancePayload {
            tenant_id: Uuid::new_v4(),
            description: String::new(),
            priority: "low".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_update_payload_skips_absent_fields() {
        let payload = UpdateMaintenancePayload {
            status: Some("completed".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_update_payload_rejects_unknown_status() {
        let payload = UpdateMaintenancePayload {
            status: Some("done".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}

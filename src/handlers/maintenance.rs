// src/handlers/maintenance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{error::AppError, extract::AppJson, ids::parse_id},
    config::AppState,
    models::maintenance::{
        CreateMaintenancePayload, DeletedMaintenance, MaintenanceRequest, MaintenanceWithTenant,
        UpdateMaintenancePayload,
    },
};

// GET /api/maintenance
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = "Maintenance",
    responses(
        (status = 200, description = "Chamados, do mais recente ao mais antigo", body = Vec<MaintenanceWithTenant>)
    )
)]
pub async fn list_maintenance(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.maintenance_service.list().await?;
    Ok((StatusCode::OK, Json(requests)))
}

// GET /api/maintenance/{id}
#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = String, Path, description = "ID do chamado")),
    responses(
        (status = 200, description = "Chamado encontrado", body = MaintenanceWithTenant),
        (status = 404, description = "Chamado não encontrado")
    )
)]
pub async fn get_maintenance(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, AppError::MaintenanceNotFound)?;
    let request = app_state.maintenance_service.get(id).await?;
    Ok((StatusCode::OK, Json(request)))
}

// POST /api/maintenance
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = "Maintenance",
    request_body = CreateMaintenancePayload,
    responses(
        (status = 201, description = "Chamado aberto", body = MaintenanceRequest),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Inquilino não encontrado")
    )
)]
pub async fn create_maintenance(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateMaintenancePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = app_state.maintenance_service.open(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PATCH /api/maintenance/{id}
#[utoipa::path(
    patch,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = String, Path, description = "ID do chamado")),
    request_body = UpdateMaintenancePayload,
    responses(
        (status = 200, description = "Chamado atualizado", body = MaintenanceRequest),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Chamado não encontrado")
    )
)]
pub async fn update_maintenance(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateMaintenancePayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, AppError::MaintenanceNotFound)?;
    payload.validate()?;

    let updated = app_state.maintenance_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(updated)))
}

// DELETE /api/maintenance/{id}
#[utoipa::path(
    delete,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = String, Path, description = "ID do chamado")),
    responses(
        (status = 200, description = "Chamado removido", body = DeletedMaintenance),
        (status = 404, description = "Chamado não encontrado")
    )
)]
pub async fn delete_maintenance(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, AppError::MaintenanceNotFound)?;
    let maintenance = app_state.maintenance_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedMaintenance {
            message: "Chamado de manutenção removido com sucesso.".to_string(),
            maintenance,
        }),
    ))
}

// src/handlers/tenants.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::tenant::TenantRecord};

// GET /api/tenants
// O contrato que o cliente HttpTenantDirectory consome
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "Tenants",
    responses(
        (status = 200, description = "Diretório de inquilinos", body = Vec<TenantRecord>)
    )
)]
pub async fn list_tenants(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tenants = app_state.tenant_repo.list_all().await?;
    Ok((StatusCode::OK, Json(tenants)))
}

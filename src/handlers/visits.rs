// src/handlers/visits.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::visit::{CreateVisitorLogPayload, VisitorLog},
};

// POST /api/visitor-log
#[utoipa::path(
    post,
    path = "/api/visitor-log",
    tag = "Visitors",
    request_body = CreateVisitorLogPayload,
    responses(
        (status = 201, description = "Visita registrada", body = VisitorLog),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_visitor_log(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateVisitorLogPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let log = app_state.visit_service.record(&payload).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

// GET /api/visitor-log
#[utoipa::path(
    get,
    path = "/api/visitor-log",
    tag = "Visitors",
    responses(
        (status = 200, description = "Visitas, da mais recente à mais antiga", body = Vec<VisitorLog>)
    )
)]
pub async fn list_visitor_logs(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let logs = app_state.visit_service.list().await?;
    Ok((StatusCode::OK, Json(logs)))
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido")]
    InvalidBody(#[from] JsonRejection),

    #[error("Inquilino não encontrado")]
    TenantNotFound,

    #[error("Chamado de manutenção não encontrado")]
    MaintenanceNotFound,

    // Falha ao buscar (ou interpretar) a lista de inquilinos.
    // O motor de quartos se recupera localmente; só chega ao cliente se alguém propagar.
    #[error("Diretório de inquilinos indisponível: {0}")]
    DataUnavailable(String),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::DataUnavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidBody(rejection) => {
                let body = Json(json!({
                    "error": "Corpo da requisição inválido.",
                    "details": rejection.body_text(),
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::TenantNotFound => (StatusCode::NOT_FOUND, "Inquilino não encontrado."),
            AppError::MaintenanceNotFound => (StatusCode::NOT_FOUND, "Chamado de manutenção não encontrado."),
            AppError::DataUnavailable(ref reason) => {
                tracing::warn!("Diretório de inquilinos indisponível: {}", reason);
                (StatusCode::SERVICE_UNAVAILABLE, "Dados de inquilinos indisponíveis no momento.")
            }

            // DatabaseError e InternalServerError viram 500; o detalhe fica só no log.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

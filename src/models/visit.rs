// src/models/visit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorLog {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[schema(example = "/available-rooms")]
    pub page: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVisitorLogPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "A página é obrigatória."))]
    pub page: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, page: &str) -> CreateVisitorLogPayload {
        CreateVisitorLogPayload {
            name: name.into(),
            email: email.into(),
            page: page.into(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload("Carlos", "carlos@exemplo.com", "/available-rooms").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let errors = payload("Carlos", "carlos-sem-arroba", "/").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_name_and_page_are_required() {
        let errors = payload("", "carlos@exemplo.com", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("page"));
    }
}

// src/common/ids.rs

use uuid::Uuid;

use crate::common::error::AppError;

/// Converte o id do path. Id malformado responde como id inexistente (404).
pub fn parse_id(raw: &str, not_found: AppError) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found)
}

use axum::extract::FromRequest;

use crate::common::error::AppError;

/// `Json<T>` cuja rejeição (corpo malformado, tipo errado, content-type ausente)
/// vira `AppError`, respondendo 400 com o mesmo corpo `{ "error": ... }` das demais falhas.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

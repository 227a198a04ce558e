// src/models/tenant.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// ---
// TenantRecord (O "Inquilino")
// ---
// Pertence ao diretório de inquilinos. Para o motor de quartos é somente leitura.
// O `id` é opaco: vem como UUID do nosso banco ou como `_id` de um diretório remoto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantRecord {
    #[serde(alias = "_id")]
    #[schema(example = "6c1f2f0e-3f8e-4b8e-9a43-0f6f4cbb1d2a")]
    pub id: String,

    #[schema(example = "Maria Santos")]
    pub name: String,

    #[schema(example = "maria@exemplo.com")]
    pub email: String,

    #[schema(example = "09171234567")]
    pub phone: String,

    #[schema(example = "Jade")]
    pub property: String,

    #[schema(example = "205")]
    pub room_number: String,

    pub lease_start_date: Option<DateTime<Utc>>,
    pub lease_end_date: Option<DateTime<Utc>>,

    #[schema(value_type = f64, example = 4500.0)]
    pub rent_amount: Decimal,
}

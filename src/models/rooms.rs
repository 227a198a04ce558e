// src/models/rooms.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::tenant::TenantRecord;

// ---
// 1. BuildingConfig (O "Prédio")
// ---
// Tabela estática lida uma única vez na inicialização.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingConfig {
    pub property_name: String,
    pub total_room_count: u32,
}

impl BuildingConfig {
    pub fn new(property_name: impl Into<String>, total_room_count: u32) -> Self {
        Self {
            property_name: property_name.into(),
            total_room_count,
        }
    }
}

// ---
// 2. RoomSlot (A "Vaga Física")
// ---
// Derivado da configuração, nunca persistido.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomSlot {
    pub room_number: String,
    pub property: String,
}

// ---
// 3. OccupiedRoom (O quarto já cruzado com os inquilinos)
// ---
// É o elemento da sequência de exibição devolvida pela API.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedRoom {
    #[schema(example = "205")]
    pub room_number: String,
    #[schema(example = "Jade")]
    pub property: String,
    pub is_rented: bool,
    pub tenant: Option<TenantRecord>,
}

// ---
// 4. Filtros escolhidos pelo usuário
// ---
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    All,
    Available,
    Rented,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: RoomStatus,
    // "" = sem filtro
    pub floor: String,
    pub search_term: String,
}

// Estado da tela: prédio selecionado + filtros. Pertence à camada de apresentação
// e é passado por valor para o resolvedor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_building: Option<String>,
    pub filters: FilterState,
}

impl ViewState {
    /// Clicar no prédio já selecionado fecha a seleção. Qualquer clique zera os filtros.
    pub fn toggle_building(&mut self, building: &str) {
        if self.selected_building.as_deref() == Some(building) {
            self.selected_building = None;
        } else {
            self.selected_building = Some(building.to_string());
        }
        self.filters = FilterState::default();
    }
}

// ---
// 5. Resumo por prédio (os cards da tela de unidades)
// ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSummary {
    #[schema(example = "Lalaine")]
    pub property: String,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub rented_rooms: usize,
}

// Violação de integridade: mais de um inquilino no mesmo quarto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateAssignment {
    pub property: String,
    pub room_number: String,
    pub tenant_ids: Vec<String>,
}

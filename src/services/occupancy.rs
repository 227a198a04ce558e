// src/services/occupancy.rs

use std::collections::{BTreeSet, HashMap};

use crate::models::{
    rooms::{
        BuildingConfig, BuildingSummary, DuplicateAssignment, FilterState, OccupiedRoom,
        RoomSlot, RoomStatus,
    },
    tenant::TenantRecord,
};

// Chave do cruzamento: (prédio em minúsculas, número do quarto exato)
fn join_key(property: &str, room_number: &str) -> (String, String) {
    (property.to_lowercase(), room_number.to_string())
}

/// Cruza as vagas com os inquilinos.
///
/// A saída tem o mesmo tamanho e a mesma ordem das vagas. Quando mais de um
/// inquilino aponta para o mesmo quarto, vence o primeiro na ordem de entrada.
pub fn resolve_occupancy(slots: &[RoomSlot], tenants: &[TenantRecord]) -> Vec<OccupiedRoom> {
    let mut by_room: HashMap<(String, String), &TenantRecord> = HashMap::with_capacity(tenants.len());
    for tenant in tenants {
        by_room
            .entry(join_key(&tenant.property, &tenant.room_number))
            .or_insert(tenant);
    }

    slots
        .iter()
        .map(|slot| {
            let tenant = by_room
                .get(&join_key(&slot.property, &slot.room_number))
                .map(|t| (*t).clone());
            OccupiedRoom {
                room_number: slot.room_number.clone(),
                property: slot.property.clone(),
                is_rented: tenant.is_some(),
                tenant,
            }
        })
        .collect()
}

/// Verificação de integridade: quartos com mais de um inquilino.
pub fn find_duplicate_assignments(tenants: &[TenantRecord]) -> Vec<DuplicateAssignment> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<(String, String), Vec<&TenantRecord>> = HashMap::new();
    for tenant in tenants {
        let key = join_key(&tenant.property, &tenant.room_number);
        let group = groups.entry(key.clone()).or_default();
        if group.is_empty() {
            order.push(key);
        }
        group.push(tenant);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let group = groups.remove(&key)?;
            if group.len() < 2 {
                return None;
            }
            Some(DuplicateAssignment {
                property: group[0].property.clone(),
                room_number: key.1,
                tenant_ids: group.iter().map(|t| t.id.clone()).collect(),
            })
        })
        .collect()
}

/// Aplica a cadeia de filtros: prédio -> status -> andar -> busca.
///
/// Cada etapa filtra o resultado da anterior e a ordem original é mantida.
/// Sem prédio selecionado a visão é vazia.
pub fn apply_filters<'a>(
    rooms: &'a [OccupiedRoom],
    selected_building: Option<&str>,
    filters: &FilterState,
) -> Vec<&'a OccupiedRoom> {
    let Some(building) = selected_building else {
        return Vec::new();
    };

    let for_building = rooms.iter().filter(|r| r.property == building);

    let by_status = for_building.filter(|r| match filters.status {
        RoomStatus::All => true,
        RoomStatus::Available => !r.is_rented,
        RoomStatus::Rented => r.is_rented,
    });

    let by_floor = by_status
        .filter(|r| filters.floor.is_empty() || r.room_number.starts_with(filters.floor.as_str()));

    by_floor
        .filter(|r| {
            filters.search_term.is_empty() || r.room_number.contains(filters.search_term.as_str())
        })
        .collect()
}

/// Opções de andar: primeiro caractere de cada quarto do prédio, sem repetição, em ordem.
pub fn floor_options(slots: &[RoomSlot], building: &str) -> Vec<String> {
    slots
        .iter()
        .filter(|r| r.property == building)
        .filter_map(|r| r.room_number.chars().next())
        .collect::<BTreeSet<char>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Totais por prédio, na ordem da configuração.
pub fn summarize(buildings: &[BuildingConfig], rooms: &[OccupiedRoom]) -> Vec<BuildingSummary> {
    buildings
        .iter()
        .map(|b| {
            let (total, available) = rooms
                .iter()
                .filter(|r| r.property == b.property_name)
                .fold((0, 0), |(total, available), r| {
                    (total + 1, available + usize::from(!r.is_rented))
                });
            BuildingSummary {
                property: b.property_name.clone(),
                total_rooms: total,
                available_rooms: available,
                rented_rooms: total - available,
            }
        })
        .collect()
}

// src/services/room_service.rs

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::RwLock;

use crate::{
    models::rooms::{BuildingConfig, BuildingSummary, OccupiedRoom, RoomSlot, ViewState},
    services::{
        occupancy::{apply_filters, find_duplicate_assignments, floor_options, resolve_occupancy, summarize},
        room_space::generate_room_slots,
        tenant_directory::TenantDirectory,
    },
};

// Resultado completo de uma atualização, marcado com a geração da busca que o produziu
struct Snapshot {
    generation: u64,
    rooms: Arc<Vec<OccupiedRoom>>,
}

// Orquestra o motor de quartos: vagas geradas uma vez, inquilinos buscados a cada
// atualização e o último resultado completo guardado como snapshot imutável.
#[derive(Clone)]
pub struct RoomService {
    buildings: Arc<Vec<BuildingConfig>>,
    slots: Arc<Vec<RoomSlot>>,
    directory: Arc<dyn TenantDirectory>,
    next_generation: Arc<AtomicU64>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl RoomService {
    pub fn new(buildings: Vec<BuildingConfig>, directory: Arc<dyn TenantDirectory>) -> Self {
        let slots = generate_room_slots(&buildings);
        // Antes da primeira busca: todos os quartos disponíveis
        let initial = resolve_occupancy(&slots, &[]);

        tracing::info!(
            "🏢 {} prédios configurados, {} quartos gerados",
            buildings.len(),
            slots.len()
        );

        Self {
            buildings: Arc::new(buildings),
            slots: Arc::new(slots),
            directory,
            next_generation: Arc::new(AtomicU64::new(1)),
            snapshot: Arc::new(RwLock::new(Snapshot {
                generation: 0,
                rooms: Arc::new(initial),
            })),
        }
    }

    /// Busca os inquilinos, recalcula a ocupação e devolve o snapshot vigente.
    ///
    /// Falha na busca não é propagada: vale a lista vazia (tudo disponível).
    /// O novo conjunto é montado inteiro antes da troca. Uma busca iniciada antes
    /// de outra que já publicou é descartada, então o snapshot nunca regride.
    pub async fn refresh(&self) -> Arc<Vec<OccupiedRoom>> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);

        let tenants = match self.directory.list_tenants().await {
            Ok(tenants) => tenants,
            Err(e) => {
                tracing::warn!("⚠️ Falha ao buscar inquilinos, exibindo todos os quartos como disponíveis: {}", e);
                Vec::new()
            }
        };

        for dup in find_duplicate_assignments(&tenants) {
            tracing::warn!(
                "⚠️ Quarto {} do prédio {} tem {} inquilinos ({:?}); usando o primeiro",
                dup.room_number,
                dup.property,
                dup.tenant_ids.len(),
                dup.tenant_ids
            );
        }

        let resolved = Arc::new(resolve_occupancy(&self.slots, &tenants));
        tracing::debug!(
            "Ocupação recalculada (geração {}): {} quartos, {} alugados",
            generation,
            resolved.len(),
            resolved.iter().filter(|r| r.is_rented).count()
        );

        let mut snapshot = self.snapshot.write().await;
        if generation > snapshot.generation {
            *snapshot = Snapshot { generation, rooms: resolved };
        } else {
            tracing::debug!(
                "Busca da geração {} descartada: geração {} já publicada",
                generation,
                snapshot.generation
            );
        }
        Arc::clone(&snapshot.rooms)
    }

    /// Sequência de exibição: atualiza e aplica a cadeia de filtros.
    pub async fn list_rooms(&self, view: &ViewState) -> Vec<OccupiedRoom> {
        let rooms = self.refresh().await;
        apply_filters(&rooms, view.selected_building.as_deref(), &view.filters)
            .into_iter()
            .cloned()
            .collect()
    }

    // Os andares dependem só das vagas geradas, não da ocupação
    pub fn floors(&self, building: &str) -> Vec<String> {
        floor_options(&self.slots, building)
    }

    pub async fn summaries(&self) -> Vec<BuildingSummary> {
        let rooms = self.refresh().await;
        summarize(&self.buildings, &rooms)
    }
}

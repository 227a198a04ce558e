// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Rooms ---
        handlers::rooms::list_rooms,
        handlers::rooms::list_buildings,
        handlers::rooms::list_floors,

        // --- Tenants ---
        handlers::tenants::list_tenants,

        // --- Maintenance ---
        handlers::maintenance::list_maintenance,
        handlers::maintenance::get_maintenance,
        handlers::maintenance::create_maintenance,
        handlers::maintenance::update_maintenance,
        handlers::maintenance::delete_maintenance,

        // --- Visitors ---
        handlers::visits::create_visitor_log,
        handlers::visits::list_visitor_logs,
    ),
    components(
        schemas(
            // --- Rooms ---
            models::rooms::OccupiedRoom,
            models::rooms::RoomStatus,
            models::rooms::BuildingSummary,

            // --- Tenants ---
            models::tenant::TenantRecord,

            // --- Maintenance ---
            models::maintenance::MaintenanceRequest,
            models::maintenance::MaintenanceWithTenant,
            models::maintenance::TenantContact,
            models::maintenance::CreateMaintenancePayload,
            models::maintenance::UpdateMaintenancePayload,
            models::maintenance::DeletedMaintenance,

            // --- Visitors ---
            models::visit::VisitorLog,
            models::visit::CreateVisitorLogPayload,
        )
    ),
    tags(
        (name = "Rooms", description = "Disponibilidade de quartos por prédio"),
        (name = "Tenants", description = "Diretório de inquilinos"),
        (name = "Maintenance", description = "Chamados de manutenção"),
        (name = "Visitors", description = "Registro de visitas ao site")
    )
)]
pub struct ApiDoc;

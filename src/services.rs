pub mod anonymize;
pub mod maintenance_service;
pub use maintenance_service::MaintenanceService;
pub mod occupancy;
pub mod room_service;
pub use room_service::RoomService;
pub mod room_space;
pub mod tenant_directory;
pub use tenant_directory::{HttpTenantDirectory, PgTenantDirectory, TenantDirectory};
pub mod visit_service;
pub use visit_service::VisitService;

pub mod tenant_repo;
pub use tenant_repo::TenantRepository;
pub mod maintenance_repo;
pub use maintenance_repo::MaintenanceRepository;
pub mod visit_repo;
pub use visit_repo::VisitRepository;

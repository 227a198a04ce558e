// src/config.rs

pub mod settings;

use std::{sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{MaintenanceRepository, TenantRepository, VisitRepository},
    models::rooms::BuildingConfig,
    services::{
        HttpTenantDirectory, MaintenanceService, PgTenantDirectory, RoomService, TenantDirectory,
        VisitService,
    },
};
pub use settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub bind_addr: String,
    pub tenant_repo: TenantRepository,
    pub room_service: RoomService,
    pub maintenance_service: MaintenanceService,
    pub visit_service: VisitService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Settings::from_env()?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Self::from_settings(db_pool, &settings)
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_settings(db_pool: PgPool, settings: &Settings) -> anyhow::Result<Self> {
        let tenant_repo = TenantRepository::new(db_pool.clone());

        let directory: Arc<dyn TenantDirectory> = match &settings.tenant_directory_url {
            Some(url) => {
                tracing::info!("🌐 Diretório de inquilinos remoto: {}", url);
                Arc::new(HttpTenantDirectory::new(url, settings.tenant_directory_timeout)?)
            }
            None => {
                tracing::info!("🗄️ Diretório de inquilinos local (tabela tenants)");
                Arc::new(PgTenantDirectory::new(tenant_repo.clone()))
            }
        };

        Ok(Self::assemble(
            db_pool,
            tenant_repo,
            settings.bind_addr.clone(),
            settings.buildings.clone(),
            directory,
        ))
    }

    pub fn with_directory(
        db_pool: PgPool,
        bind_addr: String,
        buildings: Vec<BuildingConfig>,
        directory: Arc<dyn TenantDirectory>,
    ) -> Self {
        let tenant_repo = TenantRepository::new(db_pool.clone());
        Self::assemble(db_pool, tenant_repo, bind_addr, buildings, directory)
    }

    fn assemble(
        db_pool: PgPool,
        tenant_repo: TenantRepository,
        bind_addr: String,
        buildings: Vec<BuildingConfig>,
        directory: Arc<dyn TenantDirectory>,
    ) -> Self {
        let maintenance_repo = MaintenanceRepository::new(db_pool.clone());
        let visit_repo = VisitRepository::new(db_pool.clone());

        Self {
            room_service: RoomService::new(buildings, directory),
            maintenance_service: MaintenanceService::new(maintenance_repo, tenant_repo.clone()),
            visit_service: VisitService::new(visit_repo),
            tenant_repo,
            bind_addr,
            db_pool,
        }
    }
}

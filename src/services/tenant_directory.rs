// src/services/tenant_directory.rs

use std::time::Duration;

use async_trait::async_trait;

use crate::{common::error::AppError, db::TenantRepository, models::tenant::TenantRecord};

// A única dependência externa do motor de quartos: "me dê a lista de inquilinos".
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, AppError>;
}

// ---
// Diretório local: a tabela `tenants` do nosso próprio banco
// ---
#[derive(Clone)]
pub struct PgTenantDirectory {
    repo: TenantRepository,
}

impl PgTenantDirectory {
    pub fn new(repo: TenantRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TenantDirectory for PgTenantDirectory {
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, AppError> {
        self.repo
            .list_all()
            .await
            .map_err(|e| AppError::DataUnavailable(e.to_string()))
    }
}

// ---
// Diretório remoto: GET {base_url}/api/tenants
// ---
#[derive(Clone)]
pub struct HttpTenantDirectory {
    client: reqwest::Client,
    tenants_url: String,
}

impl HttpTenantDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            tenants_url: format!("{}/api/tenants", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl TenantDirectory for HttpTenantDirectory {
    async fn list_tenants(&self) -> Result<Vec<TenantRecord>, AppError> {
        // Status de erro, falha de rede e JSON malformado caem todos em DataUnavailable
        let tenants = self
            .client
            .get(&self.tenants_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TenantRecord>>()
            .await?;
        Ok(tenants)
    }
}

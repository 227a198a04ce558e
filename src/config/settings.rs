// src/config/settings.rs

use std::{env, time::Duration};

use thiserror::Error;

use crate::models::rooms::BuildingConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BUILDINGS: &str = "Lalaine:28,Jade:30";
const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} deve ser definida")]
    Missing(&'static str),

    #[error("Valor inválido para {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Entrada inválida na tabela de prédios: '{0}' (use nome:quantidade)")]
    InvalidBuilding(String),

    #[error("Prédio duplicado na configuração: {0}")]
    DuplicateBuilding(String),
}

// Configuração lida uma única vez na inicialização
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub buildings: Vec<BuildingConfig>,
    // Quando definido, os inquilinos vêm de `{url}/api/tenants` em vez do banco local
    pub tenant_directory_url: Option<String>,
    pub tenant_directory_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let buildings = match lookup("BUILDINGS") {
            Some(raw) => parse_buildings(&raw)?,
            None => {
                tracing::info!("BUILDINGS não definida, usando padrão: {}", DEFAULT_BUILDINGS);
                parse_buildings(DEFAULT_BUILDINGS)?
            }
        };

        let tenant_directory_url = lookup("TENANT_DIRECTORY_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let timeout_secs = match lookup("TENANT_DIRECTORY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "TENANT_DIRECTORY_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            None => DEFAULT_DIRECTORY_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            buildings,
            tenant_directory_url,
            tenant_directory_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Lê a tabela estática de prédios: `"Lalaine:28,Jade:30"`.
pub fn parse_buildings(raw: &str) -> Result<Vec<BuildingConfig>, ConfigError> {
    let mut buildings: Vec<BuildingConfig> = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, count) = entry
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::InvalidBuilding(entry.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidBuilding(entry.to_string()));
        }
        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBuilding(entry.to_string()))?;

        if buildings.iter().any(|b| b.property_name == name) {
            return Err(ConfigError::DuplicateBuilding(name.to_string()));
        }
        buildings.push(BuildingConfig::new(name, count));
    }

    Ok(buildings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_buildings() {
        let settings = Settings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap();
        assert_eq!(
            settings.buildings,
            vec![BuildingConfig::new("Lalaine", 28), BuildingConfig::new("Jade", 30)]
        );
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert!(settings.tenant_directory_url.is_none());
        assert_eq!(settings.tenant_directory_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_database_url() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_directory_url_trailing_slash_is_trimmed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("TENANT_DIRECTORY_URL", "http://diretorio:4000/"),
            ("TENANT_DIRECTORY_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();
        assert_eq!(settings.tenant_directory_url.as_deref(), Some("http://diretorio:4000"));
        assert_eq!(settings.tenant_directory_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("TENANT_DIRECTORY_TIMEOUT_SECS", "cinco"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_buildings_accepts_zero_and_whitespace() {
        let buildings = parse_buildings(" Jade : 0 , Torre Azul:12 ").unwrap();
        assert_eq!(
            buildings,
            vec![BuildingConfig::new("Jade", 0), BuildingConfig::new("Torre Azul", 12)]
        );
    }

    #[test]
    fn test_parse_buildings_rejects_bad_entries() {
        assert!(matches!(parse_buildings("Jade"), Err(ConfigError::InvalidBuilding(_))));
        assert!(matches!(parse_buildings("Jade:-1"), Err(ConfigError::InvalidBuilding(_))));
        assert!(matches!(parse_buildings(":10"), Err(ConfigError::InvalidBuilding(_))));
        assert_eq!(
            parse_buildings("Jade:1,Jade:2"),
            Err(ConfigError::DuplicateBuilding("Jade".into()))
        );
    }
}

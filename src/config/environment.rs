//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La configuración se
//! construye una sola vez al arrancar y se inyecta en `AppState`.

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::str::FromStr;

use super::file::FileConfig;
use crate::cache::CacheConfig;
use crate::models::EmissionFactors;

pub const DEFAULT_MENU_URL: &str = "https://www.fueleconomy.gov/ws/rest/vehicle/menu";
pub const DEFAULT_OPTIONS_URL: &str = "https://www.fueleconomy.gov/ws/rest/vehicle/menu/options";
pub const DEFAULT_CONFIG_FILE: &str = "carbon_config.toml";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // URLs del API de menús
    pub fuel_economy_menu_url: String,
    pub fuel_economy_options_url: String,
    pub upstream_timeout_secs: u64,
    pub cache: CacheConfig,
    /// kg CO2 por galón (fórmula MPG)
    pub emission_factors: EmissionFactors,
    /// kg CO2 por litro (fórmula L/100km)
    pub litre_emission_factors: EmissionFactors,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            fuel_economy_menu_url: DEFAULT_MENU_URL.to_string(),
            fuel_economy_options_url: DEFAULT_OPTIONS_URL.to_string(),
            upstream_timeout_secs: 10,
            cache: CacheConfig::default(),
            emission_factors: EmissionFactors::per_gallon(),
            litre_emission_factors: EmissionFactors::per_litre(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar configuración: valores por defecto, luego archivo TOML, luego variables de entorno
    pub fn load() -> Result<Self> {
        let path = env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = Self::default();
        if let Some(file) = FileConfig::load(Path::new(&path))? {
            log::info!("📄 Configuración cargada desde {}", path);
            config.apply_file(file);
        }
        config.apply_overrides(|key| env::var(key).ok())?;

        Ok(config)
    }

    /// Aplicar los valores presentes en el archivo de configuración
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(environment) = file.server.environment {
            self.environment = environment;
        }
        if let Some(host) = file.server.host {
            self.host = host;
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(origins) = file.server.cors_origins {
            self.cors_origins = origins;
        }
        if let Some(url) = file.api.base_url {
            self.fuel_economy_menu_url = url;
        }
        if let Some(url) = file.api.options_url {
            self.fuel_economy_options_url = url;
        }
        if let Some(timeout) = file.api.timeout_secs {
            self.upstream_timeout_secs = timeout;
        }
        if let Some(redis_url) = file.cache.redis_url {
            self.cache.redis_url = Some(redis_url);
        }
        if let Some(ttl) = file.cache.default_timeout {
            self.cache.default_ttl = ttl;
        }
        if let Some(factors) = file.emission_factors {
            self.emission_factors = EmissionFactors::new(factors);
        }
        if let Some(factors) = file.litre_emission_factors {
            self.litre_emission_factors = EmissionFactors::new(factors);
        }
    }

    /// Aplicar variables de entorno. `lookup` permite testear sin tocar el entorno real.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT")? {
            self.port = port;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(url) = lookup("FUEL_ECONOMY_MENU_URL") {
            self.fuel_economy_menu_url = url;
        }
        if let Some(url) = lookup("FUEL_ECONOMY_OPTIONS_URL") {
            self.fuel_economy_options_url = url;
        }
        if let Some(timeout) = parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS")? {
            self.upstream_timeout_secs = timeout;
        }
        if let Some(ttl) = parse_var(&lookup, "CACHE_TTL_SECS")? {
            self.cache.default_ttl = ttl;
        }
        if let Some(redis_url) = lookup("REDIS_URL").filter(|url| !url.trim().is_empty()) {
            self.cache.redis_url = Some(redis_url);
        }
        Ok(())
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{} must be a valid number, got '{}'", key, raw))
        })
        .transpose()
}

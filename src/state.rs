//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo es de solo lectura salvo el cache.

use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::config::environment::EnvironmentConfig;
use crate::services::FuelEconomyService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub http_client: Client,
    pub cache: ResponseCache,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, cache: ResponseCache) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .user_agent(concat!("carbon-footprint-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
            cache,
        })
    }

    /// Cliente del API de menús con la configuración actual
    pub fn fuel_economy_service(&self) -> FuelEconomyService {
        FuelEconomyService::new(self.http_client.clone(), &self.config)
    }
}

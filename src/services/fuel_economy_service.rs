use reqwest::Client;

use crate::config::EnvironmentConfig;
use crate::models::{EfficiencyOption, MenuItem, VehicleQuery};
use crate::services::menu_parser::parse_menu;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Cliente del API de menús de vehículos (fueleconomy.gov)
pub struct FuelEconomyService {
    client: Client,
    menu_base_url: String,
    options_url: String,
}

impl FuelEconomyService {
    pub fn new(client: Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            menu_base_url: config.fuel_economy_menu_url.trim_end_matches('/').to_string(),
            options_url: config.fuel_economy_options_url.clone(),
        }
    }

    /// Marcas disponibles para un año
    pub async fn car_makes(&self, year: &str) -> AppResult<Vec<String>> {
        let url = format!(
            "{}/make?year={}",
            self.menu_base_url,
            urlencoding::encode(year.trim())
        );

        let items = self.fetch_menu(&url).await?;
        if items.is_empty() {
            return Err(AppError::NotFound(format!("No car makes found for year {}", year)));
        }

        Ok(items.into_iter().map(|item| item.text).collect())
    }

    /// Modelos disponibles para un año y una marca
    pub async fn car_models(&self, year: &str, make: &str) -> AppResult<Vec<String>> {
        let url = format!(
            "{}/model?year={}&make={}",
            self.menu_base_url,
            urlencoding::encode(year.trim()),
            urlencoding::encode(make.trim())
        );

        let items = self.fetch_menu(&url).await?;
        if items.is_empty() {
            return Err(AppError::NotFound(format!(
                "No car models found for {} {}",
                year, make
            )));
        }

        Ok(items.into_iter().map(|item| item.text).collect())
    }

    /// Opciones de eficiencia para un vehículo concreto
    pub async fn efficiency_options(&self, query: &VehicleQuery) -> AppResult<Vec<EfficiencyOption>> {
        let url = format!(
            "{}?year={}&make={}&model={}",
            self.options_url,
            urlencoding::encode(query.year.trim()),
            urlencoding::encode(query.make.trim()),
            urlencoding::encode(query.model.trim())
        );

        let items = self.fetch_menu(&url).await?;
        if items.is_empty() {
            return Err(not_found_error("No fuel efficiency data available"));
        }

        Ok(items.into_iter().map(EfficiencyOption::from).collect())
    }

    /// Un único intento: error de red, status != 200 o body vacío -> Upstream
    async fn fetch_menu(&self, url: &str) -> AppResult<Vec<MenuItem>> {
        log::info!("🌐 Making request to: {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/xml")
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Request failed: {}", e);
                AppError::Upstream("Failed to fetch vehicle data".to_string())
            })?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if status != reqwest::StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Vehicle data API failed with status {}: {}", status, error_text);
            return Err(AppError::Upstream(format!(
                "Failed to fetch vehicle data (status {})",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            log::error!("❌ Vehicle data API returned an empty body");
            return Err(AppError::Upstream(
                "Vehicle data API returned an empty response".to_string(),
            ));
        }

        parse_menu(&body)
    }
}

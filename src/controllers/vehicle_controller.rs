use crate::dto::vehicle_dto::{
    CarMakesQuery, CarModelsQuery, FuelEfficiencyRequest, FuelEfficiencyResponse,
};
use crate::models::VehicleQuery;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_request;

pub struct VehicleController {
    state: AppState,
}

impl VehicleController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Marcas de un año; memorizadas en cache por año durante el TTL
    pub async fn car_makes(&self, query: CarMakesQuery) -> AppResult<Vec<String>> {
        validate_request(&query)?;

        let cache_key = self.state.cache.car_makes_key(&query.year);
        if let Some(makes) = self.state.cache.get::<Vec<String>>(&cache_key).await {
            log::info!("📥 Marcas de {} servidas desde cache", query.year);
            return Ok(makes);
        }

        let makes = self.state.fuel_economy_service().car_makes(&query.year).await?;
        self.state.cache.set(&cache_key, &makes).await;

        log::info!("✅ {} marcas obtenidas para {}", makes.len(), query.year);
        Ok(makes)
    }

    pub async fn car_models(&self, query: CarModelsQuery) -> AppResult<Vec<String>> {
        validate_request(&query)?;

        let models = self
            .state
            .fuel_economy_service()
            .car_models(&query.year, &query.make)
            .await?;

        log::info!(
            "✅ {} modelos obtenidos para {} {}",
            models.len(),
            query.year,
            query.make
        );
        Ok(models)
    }

    pub async fn fuel_efficiency(
        &self,
        request: FuelEfficiencyRequest,
    ) -> AppResult<FuelEfficiencyResponse> {
        validate_request(&request)?;

        let query = VehicleQuery::from(request);
        let options = self
            .state
            .fuel_economy_service()
            .efficiency_options(&query)
            .await?;

        Ok(FuelEfficiencyResponse {
            fuel_efficiency_options: options,
        })
    }
}

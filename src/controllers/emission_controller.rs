use crate::dto::emission_dto::{
    CalculateRequest, CalculateResponse, CarbonFootprintRequest, CarbonFootprintResponse,
};
use crate::models::{DistanceUnit, TripInput, VehicleQuery};
use crate::services::{extract_mpg, EmissionCalculator};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_request;

pub struct EmissionController {
    state: AppState,
}

impl EmissionController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn calculator(&self) -> EmissionCalculator<'_> {
        EmissionCalculator::new(
            &self.state.config.litre_emission_factors,
            &self.state.config.emission_factors,
        )
    }

    /// Fórmula simplificada distancia / combustible en L/100km
    pub async fn calculate(&self, request: CalculateRequest) -> AppResult<CalculateResponse> {
        validate_request(&request)?;

        let trip = TripInput {
            distance: request.distance,
            fuel_type: request.fuel_type,
            efficiency: request.efficiency,
            frequency: request.frequency,
            unit: DistanceUnit::Km,
        };

        let result = self.calculator().calculate_litre_based(&trip)?;

        Ok(CalculateResponse {
            total_distance: result.total_distance,
            litres_used: result.litres_used,
            co2_emitted: result.co2_emitted,
        })
    }

    /// Huella de carbono a partir del MPG del vehículo en el API de menús
    pub async fn carbon_footprint(
        &self,
        request: CarbonFootprintRequest,
    ) -> AppResult<CarbonFootprintResponse> {
        validate_request(&request)?;

        log::info!(
            "🚗 Request: year={} make={} model={} fuel_type={} distance={} unit={:?}",
            request.year,
            request.make,
            request.model,
            request.fuel_type,
            request.distance,
            request.unit
        );

        // Validar combustible antes de llamar al API externo
        if !self.state.config.emission_factors.supports(&request.fuel_type) {
            return Err(AppError::InvalidFuelType(request.fuel_type));
        }

        let unit = match request.unit.as_deref() {
            Some(unit) => unit.parse::<DistanceUnit>()?,
            None => DistanceUnit::Miles,
        };

        let query = VehicleQuery::new(request.year, request.make, request.model);
        let options = self
            .state
            .fuel_economy_service()
            .efficiency_options(&query)
            .await?;

        // efficiency_options nunca devuelve una lista vacía
        let first = options
            .first()
            .ok_or_else(|| AppError::NotFound("No fuel efficiency data available".to_string()))?;

        let mpg = extract_mpg(&first.description)
            .ok_or_else(|| AppError::Parse("Failed to extract fuel efficiency".to_string()))?;

        let carbon_footprint_kg = self.calculator().calculate_mile_based(
            &request.fuel_type,
            request.distance,
            unit,
            mpg,
        )?;

        Ok(CarbonFootprintResponse { carbon_footprint_kg })
    }
}

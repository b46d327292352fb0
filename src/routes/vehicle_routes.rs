use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CarMakesQuery, CarModelsQuery, FuelEfficiencyRequest, FuelEfficiencyResponse,
};
use crate::middleware::cache_control::public_max_age;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/car_makes", get(get_car_makes))
        .route("/car_models", get(get_car_models))
        .route("/fuel_efficiency", post(get_fuel_efficiency))
}

async fn get_car_makes(
    State(state): State<AppState>,
    query: Result<Query<CarMakesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let ttl = state.cache.default_ttl();
    let controller = VehicleController::new(state);
    let makes = controller.car_makes(query).await?;
    Ok((public_max_age(ttl), Json(makes)))
}

async fn get_car_models(
    State(state): State<AppState>,
    query: Result<Query<CarModelsQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Query(query) = query?;
    let controller = VehicleController::new(state);
    let models = controller.car_models(query).await?;
    Ok(Json(models))
}

async fn get_fuel_efficiency(
    State(state): State<AppState>,
    payload: Result<Json<FuelEfficiencyRequest>, JsonRejection>,
) -> Result<Json<FuelEfficiencyResponse>, AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state);
    let response = controller.fuel_efficiency(request).await?;
    Ok(Json(response))
}

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use crate::controllers::emission_controller::EmissionController;
use crate::dto::emission_dto::{
    CalculateRequest, CalculateResponse, CarbonFootprintRequest, CarbonFootprintResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_emission_router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/carbon_footprint", post(carbon_footprint))
}

async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(request) = payload?;
    let controller = EmissionController::new(state);
    let response = controller.calculate(request).await?;
    Ok(Json(response))
}

async fn carbon_footprint(
    State(state): State<AppState>,
    payload: Result<Json<CarbonFootprintRequest>, JsonRejection>,
) -> Result<Json<CarbonFootprintResponse>, AppError> {
    let Json(request) = payload?;
    let controller = EmissionController::new(state);
    let response = controller.carbon_footprint(request).await?;
    Ok(Json(response))
}

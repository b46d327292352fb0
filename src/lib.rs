//! Carbon Footprint API
//!
//! Proxy del API de menús de vehículos (fueleconomy.gov) y cálculo de
//! emisiones de CO2 a partir de los parámetros de un trayecto.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .merge(routes::emission_routes::create_emission_router())
        .merge(routes::vehicle_routes::create_vehicle_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

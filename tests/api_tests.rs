use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};

use carbon_footprint_api::cache::ResponseCache;
use carbon_footprint_api::config::EnvironmentConfig;
use carbon_footprint_api::create_app;
use carbon_footprint_api::state::AppState;

/// Contador de llamadas recibidas por el API de menús simulado
#[derive(Clone, Default)]
struct UpstreamHits(Arc<AtomicUsize>);

impl UpstreamHits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

fn menu_xml(items: &[(&str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(text, value)| {
            format!("<menuItem><text>{}</text><value>{}</value></menuItem>", text, value)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><menuItems>{}</menuItems>"#,
        body
    )
}

async fn mock_makes(
    State(hits): State<UpstreamHits>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    hits.0.fetch_add(1, Ordering::SeqCst);
    match params.get("year").map(String::as_str) {
        Some("2020") => (
            StatusCode::OK,
            menu_xml(&[("Honda", "Honda"), ("Toyota", "Toyota")]),
        ),
        Some("1999") => (StatusCode::SERVICE_UNAVAILABLE, "maintenance".to_string()),
        _ => (StatusCode::OK, "<menuItems/>".to_string()),
    }
}

async fn mock_models(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    match params.get("make").map(String::as_str) {
        Some("Toyota") => (
            StatusCode::OK,
            menu_xml(&[("Camry", "Camry"), ("Corolla", "Corolla")]),
        ),
        Some("Land Rover") => (StatusCode::OK, menu_xml(&[("Defender", "Defender")])),
        _ => (StatusCode::OK, "<menuItems></menuItems>".to_string()),
    }
}

async fn mock_options(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    match params.get("model").map(String::as_str) {
        Some("Camry") => (
            StatusCode::OK,
            menu_xml(&[("25 MPG", "41001"), ("32 MPG", "41002")]),
        ),
        Some("Leaf") => (StatusCode::OK, menu_xml(&[("Electric", "42000")])),
        Some("Broken") => (
            StatusCode::OK,
            "<menuItems><menuItem><text>25 MPG".to_string(),
        ),
        Some("Blank") => (StatusCode::OK, "   ".to_string()),
        _ => (StatusCode::OK, "<menuItems/>".to_string()),
    }
}

/// Levantar el API de menús simulado en un puerto efímero
async fn spawn_upstream(hits: UpstreamHits) -> String {
    let app = Router::new()
        .route("/menu/make", get(mock_makes))
        .route("/menu/model", get(mock_models))
        .route("/menu/options", get(mock_options))
        .with_state(hits);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn create_test_app_with_hits() -> (TestServer, UpstreamHits) {
    let hits = UpstreamHits::default();
    let base = spawn_upstream(hits.clone()).await;

    let config = EnvironmentConfig {
        fuel_economy_menu_url: format!("{}/menu", base),
        fuel_economy_options_url: format!("{}/menu/options", base),
        upstream_timeout_secs: 5,
        ..EnvironmentConfig::default()
    };
    let cache = ResponseCache::in_memory(config.cache.default_ttl);
    let state = AppState::new(config, cache).unwrap();

    (TestServer::new(create_app(state)).unwrap(), hits)
}

async fn create_test_app() -> TestServer {
    create_test_app_with_hits().await.0
}

/// App apuntando a un puerto local donde nadie escucha
async fn create_test_app_with_unreachable_upstream() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = EnvironmentConfig {
        fuel_economy_menu_url: format!("http://{}/menu", addr),
        fuel_economy_options_url: format!("http://{}/menu/options", addr),
        upstream_timeout_secs: 5,
        ..EnvironmentConfig::default()
    };
    let cache = ResponseCache::in_memory(config.cache.default_ttl);
    let state = AppState::new(config, cache).unwrap();

    TestServer::new(create_app(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_calculate_weekly_petrol() {
    let app = create_test_app().await;
    let response = app
        .post("/calculate")
        .json(&json!({
            "distance": 20,
            "fuel_type": "Petrol",
            "efficiency": 6,
            "frequency": "weekly"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total_distance"], 1040.0);
    assert_eq!(body["co2_emitted"], 144.14);
}

#[tokio::test]
async fn test_calculate_invalid_fuel() {
    let app = create_test_app().await;
    let response = app
        .post("/calculate")
        .json(&json!({ "distance": 20, "fuel_type": "plutonium", "efficiency": 6 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_calculate_negative_distance_is_rejected() {
    let app = create_test_app().await;
    let response = app
        .post("/calculate")
        .json(&json!({ "distance": -5, "fuel_type": "petrol", "efficiency": 6 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_calculate_overflowing_distance_is_rejected() {
    let app = create_test_app().await;
    let response = app
        .post("/calculate")
        .json(&json!({
            "distance": 1e306,
            "fuel_type": "petrol",
            "efficiency": 6,
            "frequency": "daily"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_calculate_malformed_body() {
    let app = create_test_app().await;
    let response = app
        .post("/calculate")
        .json(&json!({ "fuel_type": "petrol" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_carbon_footprint_petrol_miles() {
    let app = create_test_app().await;
    let response = app
        .post("/carbon_footprint")
        .json(&json!({
            "year": 2020,
            "make": "Toyota",
            "model": "Camry",
            "fuel_type": "petrol",
            "distance": 100,
            "unit": "miles"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let expected = ((100.0 / 25.0) * 8.89_f64 * 100.0).round() / 100.0;
    assert_eq!(body["carbon_footprint_kg"].as_f64(), Some(expected));
}

#[tokio::test]
async fn test_carbon_footprint_km_is_converted() {
    let app = create_test_app().await;
    let response = app
        .post("/carbon_footprint")
        .json(&json!({
            "year": "2020",
            "make": "Toyota",
            "model": "Camry",
            "fuel_type": "petrol",
            "distance": 100,
            "unit": "km"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["carbon_footprint_kg"].as_f64(), Some(22.1));
}

#[tokio::test]
async fn test_carbon_footprint_invalid_fuel() {
    let (app, hits) = create_test_app_with_hits().await;
    let response = app
        .post("/carbon_footprint")
        .json(&json!({
            "year": 2020,
            "make": "Toyota",
            "model": "Camry",
            "fuel_type": "unknown",
            "distance": 100
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(body["code"], "INVALID_FUEL_TYPE");
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn test_carbon_footprint_no_efficiency_data() {
    let app = create_test_app().await;
    let response = app
        .post("/carbon_footprint")
        .json(&json!({
            "year": 2020,
            "make": "Toyota",
            "model": "Unknown",
            "fuel_type": "diesel",
            "distance": 100
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carbon_footprint_without_mpg_in_text() {
    let app = create_test_app().await;
    let response = app
        .post("/carbon_footprint")
        .json(&json!({
            "year": 2020,
            "make": "Nissan",
            "model": "Leaf",
            "fuel_type": "petrol",
            "distance": 100
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to extract fuel efficiency");
}

#[tokio::test]
async fn test_car_makes_is_cached() {
    let (app, hits) = create_test_app_with_hits().await;

    let first = app.get("/car_makes").add_query_param("year", "2020").await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let makes: Vec<String> = first.json();
    assert_eq!(makes, vec!["Honda".to_string(), "Toyota".to_string()]);
    assert_eq!(first.header("cache-control"), "public, max-age=300");

    let second = app.get("/car_makes").add_query_param("year", "2020").await;
    assert_eq!(second.status_code(), StatusCode::OK);
    let cached: Vec<String> = second.json();
    assert_eq!(cached, makes);

    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn test_car_makes_empty_list_is_not_found() {
    let app = create_test_app().await;
    let response = app.get("/car_makes").add_query_param("year", "1900").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_car_makes_upstream_failure() {
    let (app, hits) = create_test_app_with_hits().await;
    let response = app.get("/car_makes").add_query_param("year", "1999").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    // Los errores no se guardan en cache
    app.get("/car_makes").add_query_param("year", "1999").await;
    assert_eq!(hits.count(), 2);
}

#[tokio::test]
async fn test_car_makes_upstream_unreachable() {
    let app = create_test_app_with_unreachable_upstream().await;
    let response = app.get("/car_makes").add_query_param("year", "2020").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_car_makes_requires_year() {
    let app = create_test_app().await;
    let response = app.get("/car_makes").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_car_models() {
    let app = create_test_app().await;
    let response = app
        .get("/car_models")
        .add_query_param("year", "2020")
        .add_query_param("make", "Toyota")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let models: Vec<String> = response.json();
    assert_eq!(models, vec!["Camry".to_string(), "Corolla".to_string()]);
}

#[tokio::test]
async fn test_car_models_make_with_spaces() {
    let app = create_test_app().await;
    let response = app
        .get("/car_models")
        .add_query_param("year", "2020")
        .add_query_param("make", "Land Rover")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let models: Vec<String> = response.json();
    assert_eq!(models, vec!["Defender".to_string()]);
}

#[tokio::test]
async fn test_car_models_empty_list_is_not_found() {
    let app = create_test_app().await;
    let response = app
        .get("/car_models")
        .add_query_param("year", "2020")
        .add_query_param("make", "Unknown")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_fuel_efficiency_options() {
    let app = create_test_app().await;
    let response = app
        .post("/fuel_efficiency")
        .json(&json!({ "year": 2020, "make": "Toyota", "model": "Camry" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let options = body["fuel_efficiency_options"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["description"], "25 MPG");
    assert_eq!(options[0]["id"], "41001");
}

#[tokio::test]
async fn test_fuel_efficiency_empty_list_is_not_found() {
    let app = create_test_app().await;
    let response = app
        .post("/fuel_efficiency")
        .json(&json!({ "year": 2020, "make": "Toyota", "model": "Unknown" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_fuel_efficiency_malformed_xml() {
    let app = create_test_app().await;
    let response = app
        .post("/fuel_efficiency")
        .json(&json!({ "year": 2020, "make": "Toyota", "model": "Broken" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn test_fuel_efficiency_empty_body() {
    let app = create_test_app().await;
    let response = app
        .post("/fuel_efficiency")
        .json(&json!({ "year": 2020, "make": "Toyota", "model": "Blank" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

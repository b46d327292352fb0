use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{string_or_number, validate_not_empty, validate_year};

// Request de POST /calculate (distancia en km, eficiencia en L/100km)
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateRequest {
    #[validate(range(min = 0.0))]
    pub distance: f64,

    pub fuel_type: String,

    #[validate(range(min = 0.0))]
    pub efficiency: Option<f64>,

    // daily, weekly, monthly, yearly
    pub frequency: Option<String>,
}

// Response de POST /calculate
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub total_distance: f64,
    pub litres_used: f64,
    pub co2_emitted: f64,
}

// Request de POST /carbon_footprint
#[derive(Debug, Deserialize, Validate)]
pub struct CarbonFootprintRequest {
    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_year")]
    pub year: String,

    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_not_empty")]
    pub make: String,

    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_not_empty")]
    pub model: String,

    pub fuel_type: String,

    #[validate(range(min = 0.0))]
    pub distance: f64,

    // miles (por defecto) o km
    pub unit: Option<String>,
}

// Response de POST /carbon_footprint
#[derive(Debug, Serialize, Deserialize)]
pub struct CarbonFootprintResponse {
    pub carbon_footprint_kg: f64,
}

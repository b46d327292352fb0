use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{EfficiencyOption, VehicleQuery};
use crate::utils::validation::{string_or_number, validate_not_empty, validate_year};

// Query de GET /car_makes
#[derive(Debug, Deserialize, Validate)]
pub struct CarMakesQuery {
    #[validate(custom = "validate_year")]
    pub year: String,
}

// Query de GET /car_models
#[derive(Debug, Deserialize, Validate)]
pub struct CarModelsQuery {
    #[validate(custom = "validate_year")]
    pub year: String,

    #[validate(custom = "validate_not_empty")]
    pub make: String,
}

// Request de POST /fuel_efficiency
#[derive(Debug, Deserialize, Validate)]
pub struct FuelEfficiencyRequest {
    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_year")]
    pub year: String,

    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_not_empty")]
    pub make: String,

    #[serde(deserialize_with = "string_or_number")]
    #[validate(custom = "validate_not_empty")]
    pub model: String,
}

impl From<FuelEfficiencyRequest> for VehicleQuery {
    fn from(request: FuelEfficiencyRequest) -> Self {
        VehicleQuery::new(request.year, request.make, request.model)
    }
}

// Response de POST /fuel_efficiency
#[derive(Debug, Serialize, Deserialize)]
pub struct FuelEfficiencyResponse {
    pub fuel_efficiency_options: Vec<EfficiencyOption>,
}

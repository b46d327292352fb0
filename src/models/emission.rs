//! Factores de emisión
//!
//! Tabla estática tipo de combustible -> kg de CO2 por unidad de combustible.

use std::collections::HashMap;

use crate::utils::errors::{AppError, AppResult};

/// Mapeo combustible -> kg CO2. Las claves se guardan en minúsculas.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    factors: HashMap<String, f64>,
}

impl EmissionFactors {
    pub fn new(factors: HashMap<String, f64>) -> Self {
        Self {
            factors: factors
                .into_iter()
                .map(|(fuel, factor)| (fuel.trim().to_lowercase(), factor))
                .collect(),
        }
    }

    /// kg CO2 por litro, usados por la fórmula de L/100km
    pub fn per_litre() -> Self {
        Self::new(HashMap::from([
            ("petrol".to_string(), 2.31),
            ("diesel".to_string(), 2.68),
        ]))
    }

    /// kg CO2 por galón US, usados por la fórmula basada en MPG
    pub fn per_gallon() -> Self {
        Self::new(HashMap::from([
            ("petrol".to_string(), 8.89),
            ("diesel".to_string(), 10.18),
        ]))
    }

    /// Obtener el factor de un combustible (sin distinguir mayúsculas)
    pub fn factor_for(&self, fuel_type: &str) -> AppResult<f64> {
        self.factors
            .get(&fuel_type.trim().to_lowercase())
            .copied()
            .ok_or_else(|| AppError::InvalidFuelType(fuel_type.to_string()))
    }

    pub fn supports(&self, fuel_type: &str) -> bool {
        self.factor_for(fuel_type).is_ok()
    }

    pub fn fuel_types(&self) -> Vec<&str> {
        let mut fuels: Vec<&str> = self.factors.keys().map(String::as_str).collect();
        fuels.sort_unstable();
        fuels
    }
}

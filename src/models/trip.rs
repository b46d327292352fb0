//! Modelo de Trip
//!
//! Parámetros de un trayecto tal como los envía el usuario.

use std::str::FromStr;

use crate::utils::errors::AppError;

/// Factor de conversión kilómetros -> millas
pub const KM_TO_MILES: f64 = 0.621371;

/// Unidad de distancia - por defecto millas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Km,
}

impl DistanceUnit {
    /// Convertir una distancia expresada en esta unidad a millas
    pub fn to_miles(self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Miles => distance,
            DistanceUnit::Km => distance * KM_TO_MILES,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(DistanceUnit::Miles),
            "km" | "kms" | "kilometers" | "kilometres" => Ok(DistanceUnit::Km),
            other => Err(AppError::BadRequest(format!("Unsupported distance unit: {}", other))),
        }
    }
}

/// Frecuencia con la que se repite el trayecto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Número de repeticiones del trayecto en un año
    pub fn multiplier(self) -> f64 {
        match self {
            Frequency::Daily => 365.0,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
            Frequency::Yearly => 1.0,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "yearly" => Some(Frequency::Yearly),
            _ => None,
        }
    }

    /// Multiplicador para una frecuencia opcional; desconocida o ausente cuenta como 1
    pub fn multiplier_for(value: Option<&str>) -> f64 {
        value
            .and_then(Frequency::parse)
            .map(Frequency::multiplier)
            .unwrap_or(1.0)
    }
}

/// Parámetros de un trayecto
#[derive(Debug, Clone, PartialEq)]
pub struct TripInput {
    pub distance: f64,
    pub fuel_type: String,
    /// Litros cada 100 km
    pub efficiency: Option<f64>,
    pub frequency: Option<String>,
    pub unit: DistanceUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_multipliers() {
        assert_eq!(Frequency::multiplier_for(Some("daily")), 365.0);
        assert_eq!(Frequency::multiplier_for(Some("Weekly")), 52.0);
        assert_eq!(Frequency::multiplier_for(Some("monthly")), 12.0);
        assert_eq!(Frequency::multiplier_for(Some("yearly")), 1.0);
    }

    #[test]
    fn test_unknown_frequency_defaults_to_one() {
        assert_eq!(Frequency::multiplier_for(Some("fortnightly")), 1.0);
        assert_eq!(Frequency::multiplier_for(None), 1.0);
    }

    #[test]
    fn test_distance_unit_parsing() {
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Km);
        assert_eq!("miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_km_to_miles() {
        let miles = DistanceUnit::Km.to_miles(100.0);
        assert!((miles - 62.1371).abs() < 1e-9);
        assert_eq!(DistanceUnit::Miles.to_miles(100.0), 100.0);
    }
}

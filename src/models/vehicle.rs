//! Modelo de Vehicle
//!
//! Valores que viajan entre el API de menús (fueleconomy.gov) y nuestros
//! endpoints. Ninguno se persiste más allá de la request.

use serde::{Deserialize, Serialize};

/// Vehículo a consultar en el API externo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleQuery {
    pub year: String,
    pub make: String,
    pub model: String,
}

impl VehicleQuery {
    pub fn new(year: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            make: make.into(),
            model: model.into(),
        }
    }
}

/// Un `<menuItem>` del XML del API de menús
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub text: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Opción de eficiencia devuelta por `/menu/options`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EfficiencyOption {
    /// Texto libre, p.ej. "Auto (S8), 4 cyl, 2.5 L" o "25 MPG"
    pub description: String,
    pub id: Option<String>,
}

impl From<MenuItem> for EfficiencyOption {
    fn from(item: MenuItem) -> Self {
        Self {
            description: item.text,
            id: item.value,
        }
    }
}

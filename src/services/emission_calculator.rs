use crate::models::{DistanceUnit, EmissionFactors, Frequency, TripInput};
use crate::utils::errors::{bad_request_error, AppError, AppResult};

/// Resultado de la fórmula por litros
#[derive(Debug, Clone, PartialEq)]
pub struct LitreEmission {
    pub total_distance: f64,
    pub litres_used: f64,
    pub co2_emitted: f64,
}

/// Calculadora de emisiones de CO2
pub struct EmissionCalculator<'a> {
    per_litre: &'a EmissionFactors,
    per_gallon: &'a EmissionFactors,
}

impl<'a> EmissionCalculator<'a> {
    pub fn new(per_litre: &'a EmissionFactors, per_gallon: &'a EmissionFactors) -> Self {
        Self {
            per_litre,
            per_gallon,
        }
    }

    /// distancia × frecuencia, litros = distancia × L/100km / 100, CO2 = litros × factor
    pub fn calculate_litre_based(&self, trip: &TripInput) -> AppResult<LitreEmission> {
        let factor = self.per_litre.factor_for(&trip.fuel_type)?;
        let efficiency = trip
            .efficiency
            .ok_or_else(|| bad_request_error("efficiency is required"))?;

        let multiplier = Frequency::multiplier_for(trip.frequency.as_deref());
        let total_distance = trip.distance * multiplier;
        let litres_used = total_distance * efficiency / 100.0;
        let co2_emitted = litres_used * factor;

        log::info!(
            "🧮 {} x{} -> {} km, {} L, {} kg CO2",
            trip.distance,
            multiplier,
            total_distance,
            litres_used,
            co2_emitted
        );

        ensure_finite(&[total_distance, litres_used, co2_emitted])?;

        Ok(LitreEmission {
            total_distance,
            litres_used,
            co2_emitted: round_to(co2_emitted, 2),
        })
    }

    /// CO2 = (millas / MPG) × factor, redondeado a 2 decimales
    pub fn calculate_mile_based(
        &self,
        fuel_type: &str,
        distance: f64,
        unit: DistanceUnit,
        mpg: f64,
    ) -> AppResult<f64> {
        let factor = self.per_gallon.factor_for(fuel_type)?;
        if mpg <= 0.0 || !mpg.is_finite() {
            return Err(AppError::Parse(format!("Invalid fuel efficiency: {} MPG", mpg)));
        }

        let miles = unit.to_miles(distance);
        let co2 = (miles / mpg) * factor;

        log::info!("🧮 {} millas / {} MPG x {} -> {} kg CO2", miles, mpg, factor, co2);
        ensure_finite(&[miles, co2])?;
        Ok(round_to(co2, 2))
    }
}

/// Un resultado infinito o NaN se serializaría como `null`
fn ensure_finite(values: &[f64]) -> AppResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(bad_request_error("Input values are too large to calculate emissions"))
    }
}

/// Redondear a `decimals` decimales
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

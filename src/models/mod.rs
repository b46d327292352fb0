//! Modelos del sistema
//!
//! Valores transitorios de request/response: trayectos, vehículos
//! y factores de emisión.

pub mod emission;
pub mod trip;
pub mod vehicle;

pub use emission::EmissionFactors;
pub use trip::{DistanceUnit, Frequency, TripInput, KM_TO_MILES};
pub use vehicle::{EfficiencyOption, MenuItem, VehicleQuery};

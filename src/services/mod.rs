//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el cálculo
//! de emisiones, la extracción de MPG y la integración con el API de menús.

pub mod emission_calculator;
pub mod fuel_economy_service;
pub mod menu_parser;
pub mod mpg_extractor;

pub use emission_calculator::*;
pub use fuel_economy_service::*;
pub use mpg_extractor::*;

//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del servidor, del API de menús,
//! del cache y de los factores de emisión.

pub mod environment;
pub mod file;

pub use environment::*;

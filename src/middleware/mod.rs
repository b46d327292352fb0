//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y los headers de cache.

pub mod cache_control;
pub mod cors;

pub use cache_control::*;
pub use cors::*;

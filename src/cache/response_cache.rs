//! Cache de respuestas del API de menús
//!
//! Envuelve un backend `CacheOperations` y se encarga de las claves,
//! la (de)serialización JSON y el TTL por defecto.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::warn;

use super::{CacheOperations, MemoryCache};

const KEY_PREFIX: &str = "carbon_footprint";

#[derive(Clone)]
pub struct ResponseCache {
    backend: Arc<dyn CacheOperations>,
    default_ttl: u64,
}

impl ResponseCache {
    pub fn new(backend: Arc<dyn CacheOperations>, default_ttl: u64) -> Self {
        Self {
            backend,
            default_ttl,
        }
    }

    /// Cache en memoria del proceso
    pub fn in_memory(default_ttl: u64) -> Self {
        Self::new(Arc::new(MemoryCache::new()), default_ttl)
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Generar clave de cache con prefijo
    pub fn make_key(&self, prefix: &str, identifier: &str) -> String {
        format!("{}:{}:{}", KEY_PREFIX, prefix, identifier)
    }

    /// Generar clave del listado de marcas de un año
    pub fn car_makes_key(&self, year: &str) -> String {
        self.make_key("car_makes", year.trim())
    }

    /// Leer un valor; cualquier fallo del backend cuenta como MISS
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("⚠️ Valor de cache corrupto para clave {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                None
            }
        }
    }

    /// Guardar un valor con el TTL por defecto; los fallos solo se registran
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("⚠️ No se pudo serializar el valor para clave {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set(key, serialized, self.default_ttl).await {
            warn!("⚠️ Error guardando en cache para clave {}: {}", key, e);
        }
    }
}

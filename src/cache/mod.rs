//! Cache
//!
//! Este módulo contiene los sistemas de cache: la abstracción
//! `CacheOperations`, un backend en memoria y un backend Redis.

pub mod cache_config;
pub mod memory_cache;
pub mod redis_client;
pub mod response_cache;

pub use cache_config::CacheConfig;
pub use memory_cache::MemoryCache;
pub use redis_client::RedisClient;
pub use response_cache::ResponseCache;

use anyhow::Result;

/// Operaciones de cache sobre valores ya serializados (JSON)
#[async_trait::async_trait]
pub trait CacheOperations: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String, ttl: u64) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;

    async fn exists(&self, key: &str) -> Result<bool>;
}

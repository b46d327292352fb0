use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use carbon_footprint_api::cache::{CacheConfig, MemoryCache, RedisClient, ResponseCache};
use carbon_footprint_api::config::EnvironmentConfig;
use carbon_footprint_api::create_app;
use carbon_footprint_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🌱 Carbon Footprint API");
    info!("================================================");

    let config = EnvironmentConfig::load()?;
    info!("⚙️ Entorno: {}", config.environment);
    info!("⛽ Combustibles soportados: {:?}", config.emission_factors.fuel_types());

    let cache = build_cache(&config.cache).await;
    let addr = config.server_url();
    let app_state = AppState::new(config, cache)?;

    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /calculate - Emisiones por distancia y L/100km");
    info!("   POST /carbon_footprint - Huella de carbono por vehículo");
    info!("   GET  /car_makes?year= - Marcas por año");
    info!("   GET  /car_models?year=&make= - Modelos por marca");
    info!("   POST /fuel_efficiency - Opciones de eficiencia");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Redis si está configurado y responde; si no, cache en memoria
async fn build_cache(config: &CacheConfig) -> ResponseCache {
    if let Some(redis_url) = &config.redis_url {
        match RedisClient::new(redis_url).await {
            Ok(client) => return ResponseCache::new(Arc::new(client), config.default_ttl),
            Err(e) => warn!("⚠️ Redis no disponible ({}), usando cache en memoria", e),
        }
    }

    info!("🧠 Cache en memoria (TTL: {}s)", config.default_ttl);
    let memory = MemoryCache::new();
    spawn_cleanup(memory.clone(), config.default_ttl);
    ResponseCache::new(Arc::new(memory), config.default_ttl)
}

/// Purgar periódicamente las entradas expiradas
fn spawn_cleanup(cache: MemoryCache, ttl: u64) {
    let period = std::time::Duration::from_secs(ttl.max(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            cache.cleanup_expired().await;
        }
    });
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

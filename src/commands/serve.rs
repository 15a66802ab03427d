//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{CacheBackend, Config};
use crate::errors::{AppError, AppResult};
use crate::infra::{CacheStore, Database, MemoryCache, RedisCache, UserRepository, UserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let db = Database::connect(&config).await?;
    let repository: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));

    let cache = connect_cache(args.cache.unwrap_or(config.cache_backend), &config).await?;

    let app = create_router(AppState::new(repository, cache));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Build the cache adapter selected on the command line or in the environment.
async fn connect_cache(backend: CacheBackend, config: &Config) -> AppResult<Arc<dyn CacheStore>> {
    match backend {
        CacheBackend::Redis => Ok(Arc::new(RedisCache::connect(config).await?)),
        CacheBackend::Memory => {
            tracing::warn!("Using in-process cache; entries are not shared between instances");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}

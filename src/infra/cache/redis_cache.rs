//! Redis cache implementation.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use super::CacheStore;
use crate::config::{Config, CACHE_KEY_SEPARATOR, DEFAULT_CACHE_TTL_SECONDS};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Build the Redis key for an entry (`users::<id>`).
pub fn cache_key(namespace: &str, key: &str) -> String {
    format!("{}{}{}", namespace, CACHE_KEY_SEPARATOR, key)
}

/// Redis cache wrapper with a managed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Connect to Redis.
    pub async fn connect(config: &Config) -> Result<Self, RedisError> {
        let client = Client::open(config.redis_url.as_str())?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!("Redis cache connected");

        Ok(Self {
            connection,
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        })
    }

    /// Delete all keys matching a pattern.
    /// Uses UNLINK for non-blocking deletion, falling back to DEL.
    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64> {
        let mut conn = self.connection.clone();
        let keys: Vec<String> = conn.keys(pattern).await.map_err(cache_error)?;

        if keys.is_empty() {
            return Ok(0);
        }

        let unlinked: Result<i64, RedisError> =
            redis::cmd("UNLINK").arg(&keys).query_async(&mut conn).await;

        let removed = match unlinked {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(error = %e, "UNLINK unavailable, falling back to DEL");
                conn.del(&keys).await.map_err(cache_error)?
            }
        };

        Ok(removed.max(0) as u64)
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, namespace: &str, key: &str) -> AppResult<Option<User>> {
        let redis_key = cache_key(namespace, key);
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(&redis_key).await.map_err(cache_error)?;

        match value {
            Some(json) => match serde_json::from_str(&json) {
                Ok(user) => {
                    tracing::debug!(key = %redis_key, "Cache hit");
                    Ok(Some(user))
                }
                Err(e) => {
                    // Unreadable entries behave like a miss and get overwritten on the next read
                    tracing::warn!(key = %redis_key, error = %e, "Failed to deserialize cached user");
                    Ok(None)
                }
            },
            None => {
                tracing::debug!(key = %redis_key, "Cache miss");
                Ok(None)
            }
        }
    }

    async fn put(&self, namespace: &str, key: &str, user: &User) -> AppResult<()> {
        let redis_key = cache_key(namespace, key);
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(user)
            .map_err(|e| AppError::internal(format!("Cache serialization error: {}", e)))?;

        conn.set_ex::<_, _, ()>(&redis_key, json, self.ttl_seconds)
            .await
            .map_err(cache_error)?;

        tracing::debug!(key = %redis_key, ttl = self.ttl_seconds, "Cached user");
        Ok(())
    }

    async fn evict(&self, namespace: &str, key: &str) -> AppResult<()> {
        let redis_key = cache_key(namespace, key);
        let mut conn = self.connection.clone();
        let _: () = conn.del(&redis_key).await.map_err(cache_error)?;
        Ok(())
    }

    async fn clear(&self, namespace: &str) -> AppResult<u64> {
        self.delete_pattern(&cache_key(namespace, "*")).await
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;
        Ok(())
    }
}

/// Convert Redis error to AppError.
fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::Cache(e)
}

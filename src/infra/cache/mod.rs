//! Cache layer for user lookups.
//!
//! `CacheStore` is the namespaced key-value interface the services talk to.
//! Two adapters exist: Redis for shared deployments and an in-process map
//! for development and tests.

mod memory_cache;
mod redis_cache;

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory_cache::MemoryCache;
pub use redis_cache::{cache_key, RedisCache};

/// Namespaced cache of user records.
///
/// Implementations serialize their own concurrent access; callers hold them
/// behind `Arc<dyn CacheStore>`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a cached user
    async fn get(&self, namespace: &str, key: &str) -> AppResult<Option<User>>;

    /// Store or overwrite a cached user
    async fn put(&self, namespace: &str, key: &str, user: &User) -> AppResult<()>;

    /// Remove a cached user (no-op when absent)
    async fn evict(&self, namespace: &str, key: &str) -> AppResult<()>;

    /// Remove every entry of a namespace, returning how many were dropped.
    /// A missing namespace is not an error.
    async fn clear(&self, namespace: &str) -> AppResult<u64>;

    /// Check that the cache backend is reachable
    async fn ping(&self) -> AppResult<()>;
}

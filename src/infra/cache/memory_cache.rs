//! In-process cache implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CacheStore;
use crate::domain::User;
use crate::errors::AppResult;

type Namespaces = HashMap<String, HashMap<String, User>>;

/// Cache kept in process memory. Entries never expire.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryCache {
    namespaces: Arc<RwLock<Namespaces>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held in a namespace.
    pub async fn len(&self, namespace: &str) -> usize {
        self.namespaces
            .read()
            .await
            .get(namespace)
            .map_or(0, HashMap::len)
    }

    /// Whether a namespace holds no entries.
    pub async fn is_empty(&self, namespace: &str) -> bool {
        self.len(namespace).await == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, namespace: &str, key: &str) -> AppResult<Option<User>> {
        let namespaces = self.namespaces.read().await;
        let hit = namespaces
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .cloned();

        match &hit {
            Some(_) => tracing::debug!(namespace, key, "Cache hit"),
            None => tracing::debug!(namespace, key, "Cache miss"),
        }

        Ok(hit)
    }

    async fn put(&self, namespace: &str, key: &str, user: &User) -> AppResult<()> {
        self.namespaces
            .write()
            .await
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), user.clone());
        Ok(())
    }

    async fn evict(&self, namespace: &str, key: &str) -> AppResult<()> {
        if let Some(entries) = self.namespaces.write().await.get_mut(namespace) {
            entries.remove(key);
        }
        Ok(())
    }

    async fn clear(&self, namespace: &str) -> AppResult<u64> {
        let removed = match self.namespaces.write().await.get_mut(namespace) {
            Some(entries) => {
                let count = entries.len() as u64;
                entries.clear();
                count
            }
            None => 0,
        };
        Ok(removed)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

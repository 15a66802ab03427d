//! Admin service - Administrative cache control.

use async_trait::async_trait;
use std::sync::Arc;

use super::UserService;
use crate::config::CACHE_NAMESPACE_USERS;
use crate::errors::AppResult;
use crate::infra::CacheStore;

/// Administrative operations, independent of any single user lookup.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Drop every cached user. Safe to call on an empty or missing namespace.
    async fn clear_all_cache(&self) -> AppResult<u64>;

    /// Delete a user; same contract as `UserService::delete_user`
    async fn delete_user(&self, user_id: &str) -> AppResult<()>;
}

/// Concrete implementation of AdminService
pub struct AdminManager {
    users: Arc<dyn UserService>,
    cache: Arc<dyn CacheStore>,
}

impl AdminManager {
    pub fn new(users: Arc<dyn UserService>, cache: Arc<dyn CacheStore>) -> Self {
        Self { users, cache }
    }
}

#[async_trait]
impl AdminService for AdminManager {
    async fn clear_all_cache(&self) -> AppResult<u64> {
        let removed = self.cache.clear(CACHE_NAMESPACE_USERS).await?;
        tracing::info!(removed, namespace = CACHE_NAMESPACE_USERS, "Cleared user cache");
        Ok(removed)
    }

    async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        tracing::info!(user_id, "Admin-triggered user deletion");
        self.users.delete_user(user_id).await
    }
}

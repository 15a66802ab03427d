//! Service Container - Centralized service access.
//!
//! Wires the store and cache adapters into the user and admin services.
//! Every dependency is constructed by the caller and injected here; there
//! are no process-wide singletons.

use std::sync::Arc;

use super::{AdminManager, AdminService, UserManager, UserService};
use crate::infra::{CacheStore, UserRepository};

/// Concrete service container
pub struct Services {
    user_service: Arc<dyn UserService>,
    admin_service: Arc<dyn AdminService>,
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheStore>,
}

impl Services {
    /// Build every service on top of the given store and cache
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<dyn CacheStore>) -> Self {
        let user_service: Arc<dyn UserService> =
            Arc::new(UserManager::new(repository.clone(), cache.clone()));
        let admin_service: Arc<dyn AdminService> =
            Arc::new(AdminManager::new(user_service.clone(), cache.clone()));

        Self {
            user_service,
            admin_service,
            repository,
            cache,
        }
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    /// Get admin service
    pub fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    /// Get the backing store (health checks)
    pub fn repository(&self) -> Arc<dyn UserRepository> {
        self.repository.clone()
    }

    /// Get the cache adapter (health checks)
    pub fn cache(&self) -> Arc<dyn CacheStore> {
        self.cache.clone()
    }
}

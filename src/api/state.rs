//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{CacheStore, UserRepository};
use crate::services::{AdminService, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User operations
    pub user_service: Arc<dyn UserService>,
    /// Administrative operations
    pub admin_service: Arc<dyn AdminService>,
    /// Backing store, used for health checks
    pub repository: Arc<dyn UserRepository>,
    /// Cache adapter, used for health checks
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Create application state from an explicitly constructed store and cache.
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self::from_services(&Services::new(repository, cache))
    }

    /// Create application state from a service container.
    pub fn from_services(services: &Services) -> Self {
        Self {
            user_service: services.users(),
            admin_service: services.admin(),
            repository: services.repository(),
            cache: services.cache(),
        }
    }
}

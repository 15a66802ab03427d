//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and the user repository
//! - Caching systems (Redis, in-process)

pub mod cache;
pub mod db;
pub mod repositories;

pub use cache::{CacheStore, MemoryCache, RedisCache};
pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockCacheStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;

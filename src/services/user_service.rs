//! User service - Handles user-related business logic.
//!
//! Owns the cache policy for user lookups:
//! - reads go to the cache first and populate it on a miss,
//! - creates never touch the cache,
//! - updates refresh the cache only for keys that are already cached,
//! - deletes always evict.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::config::CACHE_NAMESPACE_USERS;
use crate::domain::{User, UserRequest};
use crate::errors::{AppError, AppResult};
use crate::infra::{CacheStore, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID, served from cache when possible
    async fn get_user(&self, user_id: &str) -> AppResult<User>;

    /// Create a new user with a generated ID
    async fn create_user(&self, request: UserRequest) -> AppResult<User>;

    /// Overwrite a user's mutable fields
    async fn update_user(&self, user_id: &str, request: UserRequest) -> AppResult<User>;

    /// Delete a user and evict its cache entry
    async fn delete_user(&self, user_id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService over a store and a cache.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheStore>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self { repo, cache }
    }

    /// Load the user an update or delete targets
    async fn find_existing(&self, user_id: &str) -> AppResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found_on_change(user_id))
    }

    /// Overwrite the cached copy of a hot key. Cold keys stay cold.
    ///
    /// When the cache cannot be read or written the entry is evicted instead,
    /// so a failed refresh never leaves the previous version behind.
    async fn refresh_if_cached(&self, user: &User) -> AppResult<()> {
        let key = user.user_id.as_str();

        let outcome = match self.cache.get(CACHE_NAMESPACE_USERS, key).await {
            Ok(None) => return Ok(()),
            Ok(Some(_)) => self.cache.put(CACHE_NAMESPACE_USERS, key, user).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(user_id = %key, "Refreshed cached user");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user_id = %key, error = %e, "Cache refresh failed, evicting entry");
                self.cache.evict(CACHE_NAMESPACE_USERS, key).await
            }
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, user_id: &str) -> AppResult<User> {
        ensure_user_id(user_id)?;

        match self.cache.get(CACHE_NAMESPACE_USERS, user_id).await {
            Ok(Some(user)) => return Ok(user),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Cache read failed, falling back to store");
            }
        }

        tracing::info!(user_id, "Fetching user from the database");
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(user_id))?;

        if let Err(e) = self.cache.put(CACHE_NAMESPACE_USERS, user_id, &user).await {
            tracing::warn!(user_id, error = %e, "Failed to populate cache");
        }

        Ok(user)
    }

    async fn create_user(&self, request: UserRequest) -> AppResult<User> {
        request.validate()?;

        let user = User::create(request);
        tracing::info!(user_id = %user.user_id, "Creating user");

        self.repo.save(user).await
    }

    async fn update_user(&self, user_id: &str, request: UserRequest) -> AppResult<User> {
        ensure_user_id(user_id)?;
        request.validate()?;

        let mut user = self.find_existing(user_id).await?;
        user.apply(request);

        let saved = self.repo.save(user).await?;
        tracing::info!(user_id, "Updated user");

        self.refresh_if_cached(&saved).await?;
        Ok(saved)
    }

    async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        ensure_user_id(user_id)?;

        self.find_existing(user_id).await?;
        self.repo.delete_by_id(user_id).await?;
        self.cache.evict(CACHE_NAMESPACE_USERS, user_id).await?;

        tracing::info!(user_id, "Deleted user and evicted cache entry");
        Ok(())
    }
}

fn ensure_user_id(user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::validation("userId must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCacheStore, MockUserRepository};

    fn sample_user(id: &str) -> User {
        User {
            user_id: id.to_string(),
            user_name: "alice".to_string(),
            email: "a@x.com".to_string(),
            phone_number: None,
            address: None,
        }
    }

    fn request(name: &str) -> UserRequest {
        UserRequest {
            user_name: name.to_string(),
            email: "a@x.com".to_string(),
            phone_number: Some("0123456789".to_string()),
            address: Some("Elm Street".to_string()),
        }
    }

    fn service(repo: MockUserRepository, cache: MockCacheStore) -> UserManager {
        UserManager::new(Arc::new(repo), Arc::new(cache))
    }

    #[tokio::test]
    async fn test_get_user_cache_hit_skips_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(0);

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_, key| Ok(Some(sample_user(key))));
        cache.expect_put().times(0);

        let user = service(repo, cache).get_user("u1").await.unwrap();
        assert_eq!(user.user_id, "u1");
    }

    #[tokio::test]
    async fn test_get_user_miss_reads_store_and_populates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let mut cache = MockCacheStore::new();
        cache.expect_get().times(1).returning(|_, _| Ok(None));
        cache
            .expect_put()
            .times(1)
            .withf(|_, _, user| user.user_id == "u1")
            .returning(|_, _, _| Ok(()));

        let user = service(repo, cache).get_user("u1").await.unwrap();
        assert_eq!(user.user_name, "alice");
    }

    #[tokio::test]
    async fn test_get_user_not_found_does_not_cache() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_, _| Ok(None));
        cache.expect_put().times(0);

        let result = service(repo, cache).get_user("ghost").await;
        assert!(
            matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found for the Id ghost")
        );
    }

    #[tokio::test]
    async fn test_get_user_falls_back_when_cache_unavailable() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id))));

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .returning(|_, _| Err(AppError::internal("cache down")));
        cache
            .expect_put()
            .returning(|_, _, _| Err(AppError::internal("cache down")));

        let user = service(repo, cache).get_user("u1").await.unwrap();
        assert_eq!(user.user_id, "u1");
    }

    #[tokio::test]
    async fn test_get_user_rejects_blank_id() {
        let repo = MockUserRepository::new();
        let cache = MockCacheStore::new();

        let result = service(repo, cache).get_user("  ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_generates_id_without_caching() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().times(1).returning(Ok);

        // No cache expectations: any cache call would panic
        let cache = MockCacheStore::new();

        let user = service(repo, cache)
            .create_user(request("alice"))
            .await
            .unwrap();
        assert!(!user.user_id.is_empty());
        assert_eq!(user.user_name, "alice");
    }

    #[tokio::test]
    async fn test_create_user_validation_happens_before_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().times(0);
        let cache = MockCacheStore::new();

        let mut bad = request("al");
        bad.email = "nope".to_string();

        let result = service(repo, cache).create_user(bad).await;
        match result {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("Username must be between 3 and 50 characters"));
                assert!(msg.contains("Invalid email format"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_surfaces_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .returning(|_| Err(AppError::conflict("Email")));
        let cache = MockCacheStore::new();

        let result = service(repo, cache).create_user(request("alice")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_cold_key_does_not_populate_cache() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_save().times(1).returning(Ok);

        let mut cache = MockCacheStore::new();
        cache.expect_get().times(1).returning(|_, _| Ok(None));
        cache.expect_put().times(0);
        cache.expect_evict().times(0);

        let user = service(repo, cache)
            .update_user("u1", request("alice2"))
            .await
            .unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.user_name, "alice2");
    }

    #[tokio::test]
    async fn test_update_hot_key_overwrites_cache() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_save().returning(Ok);

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .returning(|_, key| Ok(Some(sample_user(key))));
        cache
            .expect_put()
            .times(1)
            .withf(|_, _, user| user.user_name == "alice2")
            .returning(|_, _, _| Ok(()));

        let user = service(repo, cache)
            .update_user("u1", request("alice2"))
            .await
            .unwrap();
        assert_eq!(user.address.as_deref(), Some("Elm Street"));
    }

    #[tokio::test]
    async fn test_update_evicts_when_refresh_fails() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_save().returning(Ok);

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .returning(|_, key| Ok(Some(sample_user(key))));
        cache
            .expect_put()
            .returning(|_, _, _| Err(AppError::internal("write failed")));
        cache.expect_evict().times(1).returning(|_, _| Ok(()));

        let result = service(repo, cache)
            .update_user("u1", request("alice2"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_evicts_when_cache_lookup_fails() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_save().returning(Ok);

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_, _| Err(AppError::internal("read failed")));
        cache.expect_put().times(0);
        cache
            .expect_evict()
            .times(1)
            .withf(|_, key| key.to_string() == "u1")
            .returning(|_, _| Ok(()));

        let user = service(repo, cache)
            .update_user("u1", request("alice2"))
            .await
            .unwrap();
        assert_eq!(user.user_name, "alice2");
    }

    #[tokio::test]
    async fn test_update_propagates_failed_eviction_after_refresh_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_save().times(1).returning(Ok);

        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .returning(|_, key| Ok(Some(sample_user(key))));
        cache
            .expect_put()
            .returning(|_, _, _| Err(AppError::internal("write failed")));
        cache
            .expect_evict()
            .times(1)
            .returning(|_, _| Err(AppError::internal("evict failed")));

        let result = service(repo, cache)
            .update_user("u1", request("alice2"))
            .await;
        assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "evict failed"));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().times(0);
        let cache = MockCacheStore::new();

        let result = service(repo, cache)
            .update_user("ghost", request("alice2"))
            .await;
        assert!(
            matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found for the Id - ghost")
        );
    }

    #[tokio::test]
    async fn test_delete_user_evicts_unconditionally() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_delete_by_id().times(1).returning(|_| Ok(()));

        let mut cache = MockCacheStore::new();
        cache.expect_evict().times(1).returning(|_, _| Ok(()));

        assert!(service(repo, cache).delete_user("u1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete_by_id().times(0);

        let mut cache = MockCacheStore::new();
        cache.expect_evict().times(0);

        let result = service(repo, cache).delete_user("ghost").await;
        assert!(
            matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found for the Id - ghost")
        );
    }

    #[tokio::test]
    async fn test_delete_propagates_eviction_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_delete_by_id().returning(|_| Ok(()));

        let mut cache = MockCacheStore::new();
        cache
            .expect_evict()
            .returning(|_, _| Err(AppError::internal("cache down")));

        let result = service(repo, cache).delete_user("u1").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}

//! User repository implementation backed by PostgreSQL.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, SqlErr, Statement};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every lookup is keyed by `user_id`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the user stored under `user.user_id`
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// Delete user by ID (no-op when absent)
    async fn delete_by_id(&self, user_id: &str) -> AppResult<()>;

    /// List every stored user
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let active: ActiveModel = user.clone().into();

        UserEntity::insert(active)
            .on_conflict(
                OnConflict::column(user::Column::UserId)
                    .update_columns([
                        user::Column::UserName,
                        user::Column::Email,
                        user::Column::PhoneNumber,
                        user::Column::Address,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(user_id.to_owned())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn delete_by_id(&self, user_id: &str) -> AppResult<()> {
        UserEntity::delete_by_id(user_id.to_owned())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Map write failures, turning the email unique constraint into a conflict.
fn write_error(e: DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
        _ => AppError::from(e),
    }
}

//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            user_id: model.user_id,
            user_name: model.user_name,
            email: model.email,
            phone_number: model.phone_number,
            address: model.address,
        }
    }
}

/// Convert domain entity to a fully-set active model
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            user_id: Set(user.user_id),
            user_name: Set(user.user_name),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
            address: Set(user.address),
        }
    }
}

//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Generated by the database on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns read by lookups. `password` is deliberately absent.
pub const PUBLIC_COLUMNS: [Column; 5] = [
    Column::Id,
    Column::Email,
    Column::Name,
    Column::Username,
    Column::IsActive,
];

/// Row shape produced by a lookup projected onto [`PUBLIC_COLUMNS`].
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub is_active: bool,
}

impl From<PublicUser> for User {
    fn from(row: PublicUser) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            username: row.username,
            is_active: row.is_active,
        }
    }
}

/// Convert database model to domain entity, dropping the password
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            username: model.username,
            is_active: model.is_active,
        }
    }
}

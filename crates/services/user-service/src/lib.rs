//! User Service Library
//!
//! Data access for the `users` table through SeaORM, a thin service layer on
//! top of it, and the wiring used by the `user-service` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Connect to the database and assemble the user service.
pub async fn build_service(config: &UserServiceConfig) -> Result<(Database, UserManager), DbErr> {
    let db = Database::connect(&config.database).await?;
    let user_repo = Arc::new(UserStore::new(db.get_connection()));

    Ok((db, UserManager::new(user_repo)))
}

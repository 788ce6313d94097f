//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QuerySelect, Set, Unchanged,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity, PublicUser, PUBLIC_COLUMNS};
use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method issues exactly one statement. Client failures come back as
/// `AppError::Database` holding the original `DbErr`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with exactly the given fields
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Find user by ID. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Find user by email address. Absence is `Ok(None)`.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Mark the user as active
    async fn update_is_active_status(&self, id: &str) -> AppResult<User>;

    /// Write the fields set in `changes`. An empty update is rejected with
    /// `AppError::Validation` before any statement is issued.
    async fn update(&self, id: &str, changes: UpdateUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
#[derive(Clone)]
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance over a shared connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one(&self, condition: SimpleExpr) -> AppResult<Option<User>> {
        let row = UserEntity::find()
            .select_only()
            .columns(PUBLIC_COLUMNS)
            .filter(condition)
            .into_model::<PublicUser>()
            .one(self.db.as_ref())
            .await?;

        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        // id and is_active come from column defaults
        let active_model = ActiveModel {
            email: Set(input.email),
            name: Set(input.name),
            password: Set(input.password),
            username: Set(input.username),
            ..ActiveModel::new()
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Id.eq(id)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Email.eq(email)).await
    }

    async fn update_is_active_status(&self, id: &str) -> AppResult<User> {
        self.update(id, UpdateUser::activate()).await
    }

    async fn update(&self, id: &str, changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let mut active = ActiveModel::new();
        active.id = Unchanged(id.to_owned());

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(self.db.as_ref()).await?;
        Ok(User::from(model))
    }
}

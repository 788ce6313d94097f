//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user unless the email is already taken
    async fn register(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Get user by email
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Mark user as active
    async fn activate_user(&self, id: &str) -> AppResult<User>;

    /// Apply a partial update
    async fn update_user(&self, id: &str, changes: UpdateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(AppError::conflict("Email"));
        }

        let user = self.repo.create(input).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn activate_user(&self, id: &str) -> AppResult<User> {
        let user = self.repo.update_is_active_status(id).await?;
        info!(user_id = %user.id, "User activated");
        Ok(user)
    }

    async fn update_user(&self, id: &str, changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        self.repo.update(id, changes).await
    }
}

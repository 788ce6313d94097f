//! Unified error handling.
//!
//! Persistence failures are carried unchanged inside [`AppError::Database`]
//! so callers can still inspect the original client error.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
        assert_eq!(AppError::conflict("Email").code(), "CONFLICT");
        assert_eq!(AppError::validation("bad").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(AppError::conflict("Email").to_string(), "Email already exists");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(AppError::validation("name is empty").user_message(), "name is empty");
    }

    #[test]
    fn test_ok_or_not_found() {
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_db_error_is_preserved() {
        let err = AppError::from(sea_orm::DbErr::Custom("error".to_string()));

        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.to_string().contains("error"));
        assert!(matches!(err, AppError::Database(sea_orm::DbErr::Custom(ref msg)) if msg == "error"));
    }
}

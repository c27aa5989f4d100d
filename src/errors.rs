//! Centralized error handling.
//!
//! Provides a unified error type for the crate. Every variant is a
//! recoverable, user-facing condition: the presentation layer displays
//! `user_message()` directly, there is no retry machinery.

use thiserror::Error;

use crate::config::MSG_USER_EXISTS;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A complete user record is already stored locally
    #[error("user already exists")]
    UserAlreadyExists,

    /// Input failed validation
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::UserAlreadyExists => MSG_USER_EXISTS.to_string(),
            AppError::Validation(msg) => msg.clone(),
        }
    }

    /// Convenience constructor for validation errors
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_already_exists_message() {
        let err = AppError::UserAlreadyExists;
        assert_eq!(err.code(), "USER_ALREADY_EXISTS");
        assert_eq!(err.user_message(), "user id already created please login");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::validation("Email is required");
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.user_message(), "Email is required");
    }
}

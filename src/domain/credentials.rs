//! Credentials value object and sign-up validation rules.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, AppResult};

/// Candidate email/password pair, held in memory until submitted.
#[derive(Clone, Deserialize, Validate)]
pub struct Credentials {
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// User password (minimum 4 characters)
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check whether the pair satisfies the sign-up rules.
    ///
    /// True iff the email is non-empty and the password is at least
    /// four characters. Pure, no side effects.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate and surface the per-field messages for display.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(collect_messages(&e)))
    }
}

/// Flatten validator output into a single display string, sorted for
/// deterministic ordering.
fn collect_messages(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(msg) => msg.to_string(),
            None => err.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

//! Sign-up service - registers the single local user.

use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{CredentialStore, StoredUser};
use crate::nav::{Route, Router};

/// Sign-up service trait for dependency injection.
///
/// Callers are expected to gate `sign_up` on [`Credentials::is_valid`];
/// the service does not re-validate.
///
/// [`Credentials::is_valid`]: crate::domain::Credentials::is_valid
pub trait SignUpService: Send + Sync {
    /// Register the local user and move to the home destination.
    fn sign_up(&self, email: String, password: String) -> AppResult<()>;

    /// Abandon the flow and return to the previous destination.
    fn cancel(&self);
}

/// Concrete implementation of SignUpService with injected collaborators.
pub struct SignUpFlow<S: CredentialStore, R: Router> {
    store: Arc<S>,
    router: Arc<R>,
}

impl<S: CredentialStore, R: Router> SignUpFlow<S, R> {
    /// Create a new sign-up flow over a credential store and router
    pub fn new(store: Arc<S>, router: Arc<R>) -> Self {
        Self { store, router }
    }
}

impl<S: CredentialStore, R: Router> SignUpService for SignUpFlow<S, R> {
    fn sign_up(&self, email: String, password: String) -> AppResult<()> {
        // A user exists only when both fields are present; a partially
        // written record does not block registration.
        let record = StoredUser {
            email: self.store.user_email(),
            password: self.store.user_password(),
        };
        if record.is_complete() {
            tracing::warn!("sign-up rejected: a local user is already registered");
            return Err(AppError::UserAlreadyExists);
        }

        self.store.set_user_email(email);
        self.store.set_user_password(password);

        self.router.navigate_replacing(Route::Home, Route::Auth);
        Ok(())
    }

    fn cancel(&self) {
        self.router.go_back();
    }
}

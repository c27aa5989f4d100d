//! Credential store contract and in-memory implementation.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persisted user record owned by the credential store.
///
/// Both fields start absent and are written by the first successful
/// sign-up. A user counts as registered only when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl StoredUser {
    /// True when both email and password are present
    pub fn is_complete(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}

/// Credential store trait for dependency injection.
///
/// Key-value persistence for a single user's email and password.
/// Storage failures are not surfaced to callers: implementations keep
/// the in-memory record authoritative and log persistence problems.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialStore: Send + Sync {
    /// Stored email, if any
    fn user_email(&self) -> Option<String>;

    /// Stored password, if any
    fn user_password(&self) -> Option<String>;

    /// Persist the email
    fn set_user_email(&self, email: String);

    /// Persist the password
    fn set_user_password(&self, password: String);
}

/// Volatile credential store, useful for tests and previews.
#[derive(Default)]
pub struct InMemoryStore {
    record: RwLock<StoredUser>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current record
    pub fn record(&self) -> StoredUser {
        self.record.read().expect("credential store lock poisoned").clone()
    }
}

impl CredentialStore for InMemoryStore {
    fn user_email(&self) -> Option<String> {
        self.record
            .read()
            .expect("credential store lock poisoned")
            .email
            .clone()
    }

    fn user_password(&self) -> Option<String> {
        self.record
            .read()
            .expect("credential store lock poisoned")
            .password
            .clone()
    }

    fn set_user_email(&self, email: String) {
        self.record
            .write()
            .expect("credential store lock poisoned")
            .email = Some(email);
    }

    fn set_user_password(&self, password: String) {
        self.record
            .write()
            .expect("credential store lock poisoned")
            .password = Some(password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.user_email().is_none());
        assert!(store.user_password().is_none());
        assert!(!store.record().is_complete());
    }

    #[test]
    fn test_set_and_read_back() {
        let store = InMemoryStore::new();
        store.set_user_email("a@b.com".to_string());
        store.set_user_password("pass".to_string());

        assert_eq!(store.user_email().as_deref(), Some("a@b.com"));
        assert_eq!(store.user_password().as_deref(), Some("pass"));
        assert!(store.record().is_complete());
    }

    #[test]
    fn test_partial_record_is_not_complete() {
        let store = InMemoryStore::new();
        store.set_user_email("a@b.com".to_string());
        assert!(!store.record().is_complete());
    }
}

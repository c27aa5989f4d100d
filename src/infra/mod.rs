//! Infrastructure layer - credential persistence
//!
//! Implementations of the [`CredentialStore`] contract. The persistence
//! mechanism is opaque to the sign-up flow.

mod credential_store;
mod json_store;

pub use credential_store::{CredentialStore, InMemoryStore, StoredUser};
pub use json_store::JsonFileStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::MockCredentialStore;

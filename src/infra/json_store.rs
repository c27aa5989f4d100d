//! JSON-file-backed credential store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::credential_store::{CredentialStore, StoredUser};
use crate::config::Config;

/// Credential store persisted as a JSON document on disk.
///
/// The in-memory record is authoritative; the file is rewritten after
/// every set. A missing or unreadable file yields an empty record, and
/// persistence failures are logged rather than surfaced.
pub struct JsonFileStore {
    path: PathBuf,
    record: RwLock<StoredUser>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading any existing record.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = Self::load(&path);
        Self {
            path,
            record: RwLock::new(record),
        }
    }

    /// Open the store at the configured path.
    pub fn from_config(config: &Config) -> Self {
        Self::open(config.store_path.clone())
    }

    fn load(path: &Path) -> StoredUser {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::error!(
                    "credential store at {} is corrupt, starting empty: {}",
                    path.display(),
                    e
                );
                StoredUser::default()
            }),
            Err(_) => StoredUser::default(),
        }
    }

    fn persist(&self, record: &StoredUser) {
        match serde_json::to_string_pretty(record) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::error!(
                        "failed to persist credential store to {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
            Err(e) => tracing::error!("failed to serialize credential store: {}", e),
        }
    }
}

impl CredentialStore for JsonFileStore {
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
        let mut record = self.record.write().expect("credential store lock poisoned");
        record.email = Some(email);
        self.persist(&record);
    }

    fn set_user_password(&self, password: String) {
        let mut record = self.record.write().expect("credential store lock poisoned");
        record.password = Some(password);
        self.persist(&record);
    }
}

//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::DEFAULT_STORE_FILE;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the credential store file lives
    pub store_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Falls back to [`DEFAULT_STORE_FILE`] when `CREDENTIAL_STORE_PATH`
    /// is not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_path: env::var("CREDENTIAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_FILE)),
        }
    }
}

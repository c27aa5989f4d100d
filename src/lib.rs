//! Local account sign-up flow.
//!
//! Validates a candidate email/password pair and registers a single local
//! user, or reports that one already exists. Persistence and navigation are
//! injected collaborators, so the flow stays independent of any storage
//! mechanism or UI toolkit.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (credential persistence)
//! - **nav**: Navigation contract and back-stack implementation
//! - **errors**: Centralized error handling

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod nav;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::Credentials;
pub use errors::{AppError, AppResult};
pub use infra::{CredentialStore, InMemoryStore, JsonFileStore};
pub use nav::{HistoryRouter, Route, Router};
pub use services::{SignUpFlow, SignUpService};

//! Domain layer - Core business entities and validation
//!
//! Contains the credential value object and the sign-up validation rules,
//! independent of storage and navigation concerns.

pub mod credentials;

pub use credentials::Credentials;

//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and collaborators to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod signup_service;

pub use signup_service::{SignUpFlow, SignUpService};

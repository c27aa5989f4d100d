//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 4;

// =============================================================================
// User-facing messages
// =============================================================================

/// Shown when sign-up is rejected because a local user is already registered
pub const MSG_USER_EXISTS: &str = "user id already created please login";

// =============================================================================
// Storage
// =============================================================================

/// Default credential store file (relative to the working directory)
pub const DEFAULT_STORE_FILE: &str = "credentials.json";

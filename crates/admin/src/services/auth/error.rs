//! Credential error types.

use thiserror::Error;

/// Errors that can occur while hashing admin passwords.
///
/// Verification never errors: a malformed stored hash is simply a failed
/// login.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The Argon2 cost parameters are out of range.
    #[error("invalid password hashing parameters: {0}")]
    InvalidParams(String),

    /// Hashing a password failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Password hashing, credential checks and sessions
//! - `registry` - The admin account list and its persistence

pub mod auth;
pub mod registry;

pub use auth::{CredentialError, CredentialHasher, Session};
pub use registry::AdminRegistry;

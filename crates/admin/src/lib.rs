//! Mineral Bridge Admin library.
//!
//! Admin accounts, credential checks and sessions for the Mineral Bridge
//! dashboard. Access decisions themselves live in `mineral_bridge_core`; this
//! crate supplies the stateful parts around them.
//!
//! # Security
//!
//! Passwords are stored as Argon2id hashes and never leave the registry:
//! every public API returns [`models::AdminUser`], which has no password
//! field. Failed credential checks are indistinguishable from one another.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`models`] - Admin records and their sanitized form
//! - [`services`] - The admin registry, password hashing and sessions
//! - [`store`] - Persistence port with file and in-memory stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod models;
pub mod services;
pub mod store;

pub use config::{AdminConfig, ConfigError};
pub use models::{AdminRecord, AdminUpdate, AdminUser, NewAdmin, PasswordDigest};
pub use services::{AdminRegistry, CredentialError, CredentialHasher, Session};
pub use store::{ADMIN_STORE_KEY, AdminStore, FileStore, MemoryStore, StoreError};

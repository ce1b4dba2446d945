//! CLI command implementations.
//!
//! - `access` - Inspect role, permission and module access decisions
//! - `admin` - Manage admin accounts
//! - `login` - Verify admin credentials

pub mod access;
pub mod admin;
pub mod login;

use mineral_bridge_admin::{AdminConfig, AdminRegistry, ConfigError, CredentialError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A password could not be hashed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// No password on the command line or in the environment.
    #[error("Missing password: pass --password or set MB_ADMIN_PASSWORD")]
    MissingPassword,

    /// No admin has the given id.
    #[error("Admin not found: {0}")]
    AdminNotFound(String),

    /// The update carried no fields.
    #[error("Nothing to update: pass at least one of --name, --email, --role, --status, --password")]
    EmptyUpdate,

    /// Credentials were rejected. Deliberately says nothing about why.
    #[error("Invalid email or password")]
    LoginFailed,
}

/// Open the admin registry described by the environment.
pub fn open_registry() -> Result<AdminRegistry, CliError> {
    let config = AdminConfig::from_env()?;
    let hasher = config.hasher()?;
    tracing::debug!(path = %config.store().path().display(), "opening admin store");
    Ok(AdminRegistry::open(config.store(), hasher))
}

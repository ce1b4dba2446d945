//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MB_ADMIN_STORE_DIR` - Directory holding the admin store (default: `.mineral-bridge`)
//! - `MB_ADMIN_STORE_KEY` - Key of the admin blob (default: `mineral_bridge_admins`)
//! - `MB_PASSWORD_MEMORY_KIB` - Argon2 memory cost in KiB (default: Argon2 default)
//! - `MB_PASSWORD_ITERATIONS` - Argon2 iteration count (default: Argon2 default)

use std::path::PathBuf;

use argon2::Params;
use thiserror::Error;

use crate::services::CredentialHasher;
use crate::store::{ADMIN_STORE_KEY, FileStore};

const DEFAULT_STORE_DIR: &str = ".mineral-bridge";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Directory of the file store
    pub store_dir: PathBuf,
    /// File stem of the admin blob inside `store_dir`
    pub store_key: String,
    /// Argon2 memory cost override (KiB)
    pub password_memory_kib: Option<u32>,
    /// Argon2 iteration count override
    pub password_iterations: Option<u32>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            store_key: ADMIN_STORE_KEY.to_string(),
            password_memory_kib: None,
            password_iterations: None,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_dir = lookup("MB_ADMIN_STORE_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from);
        let store_key = lookup("MB_ADMIN_STORE_KEY").unwrap_or_else(|| ADMIN_STORE_KEY.to_string());
        validate_store_key(&store_key)?;

        let password_memory_kib = parse_optional(&lookup, "MB_PASSWORD_MEMORY_KIB")?;
        let password_iterations = parse_optional(&lookup, "MB_PASSWORD_ITERATIONS")?;

        let config = Self {
            store_dir,
            store_key,
            password_memory_kib,
            password_iterations,
        };
        // Reject cost settings Argon2 would refuse now rather than at first login.
        config.hasher()?;
        Ok(config)
    }

    /// File store described by this configuration.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.store_dir, &self.store_key)
    }

    /// Password hasher with the configured cost.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if Argon2 rejects the cost parameters.
    pub fn hasher(&self) -> Result<CredentialHasher, ConfigError> {
        if self.password_memory_kib.is_none() && self.password_iterations.is_none() {
            return Ok(CredentialHasher::default());
        }
        CredentialHasher::with_cost(
            self.password_memory_kib.unwrap_or(Params::DEFAULT_M_COST),
            self.password_iterations.unwrap_or(Params::DEFAULT_T_COST),
        )
        .map_err(|e| ConfigError::InvalidEnvVar("MB_PASSWORD_*".to_string(), e.to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional numeric variable.
fn parse_optional(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<u32>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// The key becomes a file name, so it must be a single path component.
fn validate_store_key(key: &str) -> Result<(), ConfigError> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control);
    if invalid {
        return Err(ConfigError::InvalidEnvVar(
            "MB_ADMIN_STORE_KEY".to_string(),
            format!("'{key}' is not a valid file name"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(
            config.store().path(),
            PathBuf::from(".mineral-bridge/mineral_bridge_admins.json")
        );
    }

    #[test]
    fn test_store_overrides() {
        let config = load(&[
            ("MB_ADMIN_STORE_DIR", "/srv/mb"),
            ("MB_ADMIN_STORE_KEY", "staging_admins"),
        ])
        .unwrap();
        assert_eq!(
            config.store().path(),
            PathBuf::from("/srv/mb/staging_admins.json")
        );
    }

    #[test]
    fn test_invalid_store_key() {
        for key in ["", "..", "a/b", "a\\b"] {
            let result = load(&[("MB_ADMIN_STORE_KEY", key)]);
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidEnvVar(ref var, _)) if var == "MB_ADMIN_STORE_KEY"
                ),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_password_cost_parsing() {
        let config = load(&[
            ("MB_PASSWORD_MEMORY_KIB", "65536"),
            ("MB_PASSWORD_ITERATIONS", " 3 "),
        ])
        .unwrap();
        assert_eq!(config.password_memory_kib, Some(65536));
        assert_eq!(config.password_iterations, Some(3));
    }

    #[test]
    fn test_password_cost_not_a_number() {
        let result = load(&[("MB_PASSWORD_ITERATIONS", "many")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(ref var, _)) if var == "MB_PASSWORD_ITERATIONS"
        ));
    }

    #[test]
    fn test_password_cost_rejected_by_argon2() {
        let result = load(&[("MB_PASSWORD_ITERATIONS", "0")]);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}

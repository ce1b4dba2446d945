//! Integration tests for Mineral Bridge access control.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mineral-bridge-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `access_rules` - Role hierarchy, module table and permission matching
//! - `admin_registry` - Registry behaviour against a real file store
//! - `session_flows` - Sign-in, sign-out and access checks through a session
//!
//! Every test gets its own temporary store directory, so tests can run in
//! parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use mineral_bridge_admin::{ADMIN_STORE_KEY, AdminRegistry, CredentialHasher, FileStore};
use secrecy::SecretString;
use tempfile::TempDir;

/// Seed password of every demo account.
pub const SEED_PASSWORD: &str = "demo123";

/// A temporary store directory and a registry opened on it.
pub struct TestContext {
    dir: TempDir,
    pub registry: AdminRegistry,
}

impl TestContext {
    /// Open a registry on an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let registry = open_registry(dir.path());
        Ok(Self { dir, registry })
    }

    /// Open a registry on a directory that already holds `blob`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn with_blob(blob: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::write(store(dir.path()).path(), blob)?;
        let registry = open_registry(dir.path());
        Ok(Self { dir, registry })
    }

    /// The file store backing this context.
    #[must_use]
    pub fn store(&self) -> FileStore {
        store(self.dir.path())
    }

    /// A second registry over the same directory, as after a restart.
    #[must_use]
    pub fn reopen(&self) -> AdminRegistry {
        open_registry(self.dir.path())
    }

    /// Raw persisted blob, if one was written.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        std::fs::read_to_string(self.store().path()).ok()
    }
}

/// Wrap a test password.
#[must_use]
pub fn secret(password: &str) -> SecretString {
    SecretString::from(password.to_owned())
}

fn store(dir: &Path) -> FileStore {
    FileStore::new(dir, ADMIN_STORE_KEY)
}

fn open_registry(dir: &Path) -> AdminRegistry {
    AdminRegistry::open(store(dir), CredentialHasher::fast())
}

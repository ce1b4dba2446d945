//! Admin registry.
//!
//! The registry owns the list of admin accounts. It loads the list once from
//! an [`AdminStore`], serves reads from memory and writes every mutation back
//! to the store before returning.
//!
//! # Seed
//!
//! When the store holds nothing, or holds something that cannot be read as an
//! admin list, the registry starts from four demo accounts (password
//! `demo123`). The seed is not written back until the first mutation. A list
//! with some unreadable records keeps the readable ones and does not use the
//! seed.
//!
//! # Store failures
//!
//! Store errors never reach the caller. A failed load falls back to the seed
//! and a failed save is logged; the in-memory list stays authoritative.

use parking_lot::RwLock;
use secrecy::SecretString;
use tracing::{debug, error, info, instrument, warn};

use mineral_bridge_core::{AdminId, AdminStatus};

use super::auth::{CredentialError, CredentialHasher};
use crate::models::{AdminRecord, AdminUpdate, AdminUser, NewAdmin, PasswordDigest};
use crate::store::{self, AdminStore};

/// Demo accounts used when the store is empty or unreadable.
const SEED_BLOB: &str = r#"[
    {"id":"1","name":"Admin User","email":"admin@mineralbridge.com","password":"demo123","role":"ceo","status":"Active"},
    {"id":"2","name":"James Mwangi","email":"james@mineralbridge.com","password":"demo123","role":"ceo","status":"Active"},
    {"id":"3","name":"Grace Okafor","email":"grace@mineralbridge.com","password":"demo123","role":"operations_manager","status":"Active"},
    {"id":"4","name":"Emily Carter","email":"emily@mineralbridge.com","password":"demo123","role":"support_agent","status":"Inactive"}
]"#;

/// Verified when no account matches the email, so unknown emails cost as
/// much as wrong passwords.
const DECOY_PASSWORD: &str = "mineral-bridge-decoy";

/// In-memory admin list with write-through persistence.
pub struct AdminRegistry {
    store: Box<dyn AdminStore>,
    hasher: CredentialHasher,
    records: RwLock<Vec<AdminRecord>>,
    decoy: Option<PasswordDigest>,
}

impl std::fmt::Debug for AdminRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminRegistry")
            .field("admins", &self.records.read().len())
            .finish_non_exhaustive()
    }
}

impl AdminRegistry {
    /// Load the registry from `store`, falling back to the seed accounts.
    #[instrument(skip_all)]
    pub fn open(store: impl AdminStore + 'static, hasher: CredentialHasher) -> Self {
        let (records, upgraded) = match store.load() {
            Ok(Some(records)) => upgrade_all(&hasher, records),
            Ok(None) => {
                info!("admin store is empty, using seed accounts");
                (seed(&hasher), false)
            }
            Err(e) => {
                warn!(error = %e, "failed to load admin store, using seed accounts");
                (seed(&hasher), false)
            }
        };

        let decoy = match hasher.hash(&SecretString::from(DECOY_PASSWORD)) {
            Ok(digest) => Some(digest),
            Err(e) => {
                error!(error = %e, "failed to hash decoy password");
                None
            }
        };

        let registry = Self {
            store: Box::new(store),
            hasher,
            records: RwLock::new(records),
            decoy,
        };

        if upgraded {
            info!("hashed legacy cleartext passwords");
            registry.persist(&registry.records.read());
        }

        info!(admins = registry.len(), "admin registry opened");
        registry
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Snapshot of every account, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<AdminUser> {
        self.records.read().iter().map(AdminRecord::to_user).collect()
    }

    /// Look up one account by id.
    #[must_use]
    pub fn get(&self, id: &AdminId) -> Option<AdminUser> {
        self.records
            .read()
            .iter()
            .find(|record| &record.id == id)
            .map(AdminRecord::to_user)
    }

    /// Create an account with a fresh id and `Active` status.
    ///
    /// Emails are not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the password cannot be hashed. Nothing is
    /// stored in that case.
    #[instrument(skip(self, admin), fields(email = %admin.email, role = %admin.role))]
    pub fn add(&self, admin: NewAdmin) -> Result<AdminUser, CredentialError> {
        let password = self.hasher.hash(&admin.password)?;
        let record = AdminRecord {
            id: AdminId::generate(),
            name: admin.name,
            email: admin.email,
            password,
            role: admin.role,
            status: AdminStatus::Active,
        };
        let user = record.to_user();

        let mut records = self.records.write();
        records.push(record);
        self.persist(&records);

        info!(id = %user.id, "admin created");
        Ok(user)
    }

    /// Merge the supplied fields into the account `id`.
    ///
    /// Returns `false` if no account has that id; nothing is persisted then.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if a new password cannot be hashed. The
    /// account is left unchanged in that case.
    #[instrument(skip_all, fields(id = %id))]
    pub fn update(&self, id: &AdminId, update: AdminUpdate) -> Result<bool, CredentialError> {
        let password = update
            .password
            .as_ref()
            .map(|password| self.hasher.hash(password))
            .transpose()?;

        let mut records = self.records.write();
        let Some(record) = records.iter_mut().find(|record| &record.id == id) else {
            debug!("admin not found, nothing to update");
            return Ok(false);
        };

        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(email) = update.email {
            record.email = email;
        }
        if let Some(role) = update.role {
            record.role = role;
        }
        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(password) = password {
            record.password = password;
        }

        self.persist(&records);
        info!("admin updated");
        Ok(true)
    }

    /// Delete the account `id`. Returns whether an account was removed.
    #[instrument(skip_all, fields(id = %id))]
    pub fn remove(&self, id: &AdminId) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| &record.id != id);
        if records.len() == before {
            debug!("admin not found, nothing to remove");
            return false;
        }

        self.persist(&records);
        info!("admin removed");
        true
    }

    /// Find the active account with this email and password.
    ///
    /// Emails match case-insensitively. Unknown email, wrong password and
    /// inactive account all return `None`. If several accounts share the
    /// email, the first one that passes every check wins.
    #[instrument(skip(self, password))]
    pub fn find_by_credentials(&self, email: &str, password: &SecretString) -> Option<AdminUser> {
        // Copy the candidates out so hashing runs without holding the lock.
        let candidates: Vec<AdminRecord> = self
            .records
            .read()
            .iter()
            .filter(|record| record.email.matches(email))
            .cloned()
            .collect();

        if candidates.is_empty() {
            if let Some(decoy) = &self.decoy {
                let _ = self.hasher.verify(password, decoy);
            }
            debug!("credential check failed");
            return None;
        }

        let found = candidates.into_iter().find(|record| {
            let password_ok = self.hasher.verify(password, &record.password);
            password_ok && record.status.is_active()
        });

        match found {
            Some(record) => {
                debug!(id = %record.id, "credential check passed");
                Some(record.into_user())
            }
            None => {
                debug!("credential check failed");
                None
            }
        }
    }

    /// Write the whole list to the store. Failures are logged only.
    fn persist(&self, records: &[AdminRecord]) {
        if let Err(e) = self.store.save(records) {
            error!(error = %e, "failed to persist admin registry");
        }
    }
}

/// Decode and hash the seed accounts.
fn seed(hasher: &CredentialHasher) -> Vec<AdminRecord> {
    match store::decode(SEED_BLOB) {
        Ok(records) => upgrade_all(hasher, records).0,
        Err(e) => {
            error!(error = %e, "failed to decode seed accounts");
            Vec::new()
        }
    }
}

/// Hash any cleartext passwords. Returns whether anything changed.
fn upgrade_all(hasher: &CredentialHasher, records: Vec<AdminRecord>) -> (Vec<AdminRecord>, bool) {
    let mut changed = false;
    let records = records
        .into_iter()
        .map(|mut record| {
            if record.password.is_argon2id() {
                return record;
            }
            match hasher.upgrade(record.password.clone()) {
                Ok(digest) => {
                    record.password = digest;
                    changed = true;
                }
                Err(e) => warn!(id = %record.id, error = %e, "failed to hash legacy password"),
            }
            record
        })
        .collect();
    (records, changed)
}

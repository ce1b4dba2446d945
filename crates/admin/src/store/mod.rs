//! Persistence port for the admin registry.
//!
//! The whole registry is one JSON array stored under a single key:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "name": "Admin User",
//!     "email": "admin@mineralbridge.com",
//!     "password": "$argon2id$v=19$...",
//!     "role": "ceo",
//!     "status": "Active"
//!   }
//! ]
//! ```
//!
//! Records are decoded one by one. A record that does not decode is logged and
//! skipped, and is gone from the blob after the next save. Only a blob that is
//! not a JSON array, or whose records all fail to decode, is reported as
//! corrupt.
//!
//! # Stores
//!
//! - [`FileStore`] - one `<key>.json` file in a directory, replaced atomically
//! - [`MemoryStore`] - an in-process blob, for tests and embedding

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::models::AdminRecord;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known key of the admin blob.
pub const ADMIN_STORE_KEY: &str = "mineral_bridge_admins";

/// Errors that can occur while reading or writing the admin blob.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blob is not a valid admin list.
    #[error("corrupt admin data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The new blob could not replace the old one.
    #[error("could not replace admin data: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Durable home of the admin list.
pub trait AdminStore: Send + Sync {
    /// Read the persisted list. `Ok(None)` means nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the blob cannot be read or decoded.
    fn load(&self) -> Result<Option<Vec<AdminRecord>>, StoreError>;

    /// Replace the persisted list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the blob cannot be encoded or written.
    fn save(&self, records: &[AdminRecord]) -> Result<(), StoreError>;
}

impl<T: AdminStore + ?Sized> AdminStore for Arc<T> {
    fn load(&self) -> Result<Option<Vec<AdminRecord>>, StoreError> {
        (**self).load()
    }

    fn save(&self, records: &[AdminRecord]) -> Result<(), StoreError> {
        (**self).save(records)
    }
}

/// Decode a blob into records, skipping records that do not decode.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if the blob is not a JSON array, or if it
/// holds records and none of them decode.
pub fn decode(blob: &str) -> Result<Vec<AdminRecord>, StoreError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(blob)?;

    let mut records = Vec::with_capacity(entries.len());
    let mut last_error = None;
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<AdminRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable admin record");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if records.is_empty() => Err(StoreError::Corrupt(e)),
        _ => Ok(records),
    }
}

/// Encode records into a blob.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if serialization fails.
pub fn encode(records: &[AdminRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}

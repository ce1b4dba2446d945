//! In-process admin store.

use parking_lot::Mutex;

use super::{AdminStore, StoreError, decode, encode};
use crate::models::AdminRecord;

/// Keeps the encoded blob in memory.
///
/// The blob goes through the same JSON codec as [`super::FileStore`], so a
/// corrupt blob can be injected with [`MemoryStore::with_blob`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    blob: Option<String>,
    saves: usize,
}

impl MemoryStore {
    /// An empty store (nothing persisted yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `blob`.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                blob: Some(blob.into()),
                saves: 0,
            }),
        }
    }

    /// The current blob, if any.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        self.inner.lock().blob.clone()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.inner.lock().saves
    }
}

impl AdminStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<AdminRecord>>, StoreError> {
        self.inner.lock().blob.as_deref().map(decode).transpose()
    }

    fn save(&self, records: &[AdminRecord]) -> Result<(), StoreError> {
        let blob = encode(records)?;
        let mut inner = self.inner.lock();
        inner.blob = Some(blob);
        inner.saves += 1;
        Ok(())
    }
}

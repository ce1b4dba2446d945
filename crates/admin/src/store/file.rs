//! File-backed admin store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use super::{AdminStore, StoreError, decode, encode};
use crate::models::AdminRecord;

/// Stores the blob as `<dir>/<key>.json`.
///
/// Saves write a temporary file in the same directory and rename it over the
/// key file, so readers see either the old or the new list, never a partial
/// write. The temporary file is removed if any step fails.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Path of the key file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

impl AdminStore for FileStore {
    fn load(&self) -> Result<Option<Vec<AdminRecord>>, StoreError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(blob) => decode(&blob).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "admin store file not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &[AdminRecord]) -> Result<(), StoreError> {
        let blob = encode(records)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(blob.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path())?;

        debug!(path = %self.path().display(), count = records.len(), "admin store saved");
        Ok(())
    }
}

//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each key as a single file under a base directory.
//! It is used by native builds to keep the session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── tokens     # serialised {access, refresh}
//! └── user       # serialised user record
//! ```
//!
//! A platform data directory such as `dirs::data_dir()/<app>/` is the usual base.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{KeyValueStore, StoreError};

/// Filesystem-backed store for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|e| io_error(key, e))?;
        std::fs::write(self.path(key), value).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("console"));

        assert!(store.get("tokens").unwrap().is_none());
        store.set("tokens", "{\"access\":\"a\",\"refresh\":\"r\"}").unwrap();

        let reopened = FileStore::new(dir.path().join("console"));
        assert_eq!(
            reopened.get("tokens").unwrap().as_deref(),
            Some("{\"access\":\"a\",\"refresh\":\"r\"}")
        );
    }

    #[test]
    fn test_remove_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.remove("user").unwrap();
        store.set("user", "{}").unwrap();
        store.remove("user").unwrap();
        assert!(store.get("user").unwrap().is_none());
    }
}

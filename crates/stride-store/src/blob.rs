//! Key-value blob persistence.
//!
//! A blob is an opaque UTF-8 document. Backends only load and replace whole
//! blobs; the typed layer above decides how to parse them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Load/save adapter for whole-document persistence.
pub trait BlobStore {
    /// Return the blob stored under `key`, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

fn check_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// One `{key}.json` file per key inside a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        check_key(key)?;
        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        tmp.write_all(blob.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| StoreError::io(&path, e.error))?;
        tracing::debug!(key, path = %path.display(), bytes = blob.len(), "saved blob");
        Ok(())
    }
}

/// In-memory backend for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<BTreeMap<String, String>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly, bypassing the typed layer.
    #[must_use]
    pub fn with_blob(self, key: &str, blob: &str) -> Self {
        self.blobs.borrow_mut().insert(key.to_string(), blob.to_string());
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.blobs.borrow_mut().insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.load("assignments").unwrap(), None);
        store.save("assignments", "[]").unwrap();
        assert_eq!(store.load("assignments").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = MemoryBlobStore::new();
        for key in ["", "../etc", "a/b", "Upper", "dot.json"] {
            assert!(
                matches!(store.save(key, "{}"), Err(StoreError::InvalidKey(_))),
                "{key:?}"
            );
        }
    }

    #[test]
    fn file_store_creates_dir_and_replaces_blob() {
        let temp = TempDir::new().expect("tempdir should create");
        let dir = temp.path().join("nested/.stride");
        let store = FileBlobStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.load("plan_overrides").unwrap(), None);

        store.save("plan_overrides", "{\"a|0\":{}}").unwrap();
        store.save("plan_overrides", "{}").unwrap();
        assert_eq!(store.load("plan_overrides").unwrap().as_deref(), Some("{}"));
        assert!(store.path_for("plan_overrides").ends_with("plan_overrides.json"));

        let leftovers = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(leftovers, 1, "temporary files should be renamed away");
    }
}

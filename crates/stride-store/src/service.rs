//! Typed access to Stride state over a [`BlobStore`].
//!
//! `StrideStore` owns the backend. Repository methods are implemented as
//! `impl StrideStore` blocks in [`crate::repos`]. Every mutation loads the
//! current document, applies the change, and writes the whole document back.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::blob::{BlobStore, FileBlobStore};
use crate::error::StoreError;

pub struct StrideStore<S = FileBlobStore> {
    blobs: S,
}

impl<S: BlobStore> StrideStore<S> {
    #[must_use]
    pub const fn new(blobs: S) -> Self {
        Self { blobs }
    }

    /// Access the underlying backend.
    #[must_use]
    pub const fn blobs(&self) -> &S {
        &self.blobs
    }

    /// Load and parse the document under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored and `StoreError::Corrupt`
    /// when the stored text does not parse as `T`.
    pub(crate) fn read_doc<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(blob) = self.blobs.load(key)? else {
            return Ok(None);
        };
        if blob.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    pub(crate) fn write_doc<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(value)?;
        self.blobs.save(key, &blob)
    }
}

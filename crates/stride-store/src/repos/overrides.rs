//! Override repository for the `plan_overrides` document.

use stride_core::overrides::OverrideMap;

use crate::OVERRIDES_KEY;
use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::service::StrideStore;

impl<S: BlobStore> StrideStore<S> {
    /// Load the override map.
    ///
    /// An unreadable document is treated as empty: overrides are a
    /// convenience layer and the plan stays usable without them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only when the backend itself fails.
    pub fn load_overrides(&self) -> Result<OverrideMap, StoreError> {
        match self.read_doc::<OverrideMap>(OVERRIDES_KEY) {
            Ok(map) => Ok(map.unwrap_or_default()),
            Err(StoreError::Corrupt { key, reason }) => {
                tracing::warn!(%key, %reason, "discarding unreadable plan overrides");
                Ok(OverrideMap::new())
            }
            Err(error) => Err(error),
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be written.
    pub fn save_overrides(&self, overrides: &OverrideMap) -> Result<(), StoreError> {
        self.write_doc(OVERRIDES_KEY, overrides)
    }

    /// Load, mutate, and write back the override map in one step.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading or saving fails.
    pub fn modify_overrides<T, F>(&self, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut OverrideMap) -> T,
    {
        let mut overrides = self.load_overrides()?;
        let before = overrides.clone();
        let result = apply(&mut overrides);
        if overrides != before {
            self.save_overrides(&overrides)?;
        }
        Ok(result)
    }
}

//! # stride-store
//!
//! Local persistence for Stride state.
//!
//! State lives in a key-value blob store: each key maps to one JSON document.
//! Two keys are used, [`ASSIGNMENTS_KEY`] (the assignment list) and
//! [`OVERRIDES_KEY`] (sparse per-chunk plan overrides). The [`BlobStore`]
//! trait is the persistence seam; [`FileBlobStore`] writes one file per key
//! under the project's `.stride/` directory, [`MemoryBlobStore`] backs tests.
//!
//! [`StrideStore`] layers typed repositories over any `BlobStore`.

pub mod blob;
pub mod error;
pub mod repos;
pub mod service;
pub mod updates;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use service::StrideStore;

/// Storage key of the assignment list.
pub const ASSIGNMENTS_KEY: &str = "assignments";

/// Storage key of the chunk override map.
pub const OVERRIDES_KEY: &str = "plan_overrides";

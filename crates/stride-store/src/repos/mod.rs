//! Repository methods on [`StrideStore`](crate::StrideStore), one module per document.

mod assignment;
mod overrides;

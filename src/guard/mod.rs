//! Incremental Build Guard.
//!
//! Two independent mechanisms: a modification-time staleness check that
//! decides whether a build key runs at all, and a content-hash gate that
//! decides whether the build-metadata artifact is rewritten.

pub mod content_hash;
pub mod metadata;
pub mod staleness;

pub use content_hash::{OutputDigest, hash_outputs};
pub use metadata::{BuildMetadata, update_metadata};
pub use staleness::{StaleReason, Staleness, check_staleness};

//! Reelbox Storage Library
//!
//! Local-filesystem persistence for uploaded thumbnail assets.
//!
//! # Filename format
//!
//! Stored files live flat under the configured asset root and are named
//! `{owner_id}.{ext}`. Filenames must not contain `..` or a leading `/`.
//! Filename construction is centralized in the `paths` module so the store
//! and its callers stay consistent.

pub mod error;
pub mod local;
pub mod paths;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use local::AssetStore;
pub use paths::thumbnail_filename;

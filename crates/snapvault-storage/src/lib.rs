//! Snapvault Storage Library
//!
//! This crate provides the object storage abstraction and implementations
//! for Snapvault. It includes the `ObjectStorage` trait and backends for a
//! remote HTTP store and the local filesystem.
//!
//! # Write semantics
//!
//! Writes are last-writer-wins: `put_object` replaces any existing object
//! under the same key, with no existence check, versioning, or conflict
//! detection. Keys are the user-chosen upload names, stored exactly as
//! typed; only keys that would escape a local base directory are rejected.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-remote")]
pub mod remote;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-remote")]
pub use remote::RemoteStorage;
pub use snapvault_core::StorageBackend;
pub use traits::{ObjectStorage, StorageError, StorageResult};

//! Storage abstraction trait
//!
//! This module defines the `ObjectStorage` trait that all storage backends
//! must implement.

use async_trait::async_trait;
use bytes::Bytes;
use snapvault_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    PutFailed(String),

    #[error("Download failed: {0}")]
    GetFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object storage abstraction
///
/// The upload pipeline talks to the cloud store through this trait so it
/// never couples to a concrete provider. Keys are caller-chosen object
/// names; see the crate root documentation for the overwrite semantics.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write an object under `key`, replacing any existing object with that
    /// key. Returns the public URL of the stored object.
    async fn put_object(&self, key: &str, data: Bytes) -> StorageResult<String>;

    /// Read an object back by its key.
    async fn get_object(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check if an object exists under `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

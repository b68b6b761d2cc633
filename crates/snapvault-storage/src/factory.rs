#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-remote")]
use crate::RemoteStorage;
use crate::{ObjectStorage, StorageBackend, StorageError, StorageResult};
use snapvault_core::Config;
use std::sync::Arc;
#[cfg(feature = "storage-remote")]
use std::time::Duration;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn ObjectStorage>> {
    let backend = config.storage_backend.unwrap_or(StorageBackend::Remote);

    match backend {
        #[cfg(feature = "storage-remote")]
        StorageBackend::Remote => {
            let base_url = config.remote_storage_base_url.clone().ok_or_else(|| {
                StorageError::Config("REMOTE_STORAGE_BASE_URL not configured".to_string())
            })?;
            let token = config.remote_storage_token.clone();

            let storage = RemoteStorage::new(
                base_url,
                token,
                Duration::from_secs(config.http_timeout_secs),
            )?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-remote"))]
        StorageBackend::Remote => Err(StorageError::Config(
            "Remote storage backend not available (storage-remote feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::Config("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::Config("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path, base_url).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::Config(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

//! Loopback media transfer
//!
//! Picker APIs hand back a URI, not bytes, while the store needs a byte
//! payload; resolving the reference is one loopback round-trip per upload.
//! The payload is never cached because the URI may point at transient
//! picker-managed storage.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use snapvault_core::MediaReference;

use crate::error::{MediaError, MediaResult};

/// Seam for resolving a device-local media reference to its bytes.
#[async_trait]
pub trait MediaTransfer: Send + Sync {
    async fn fetch(&self, reference: &MediaReference) -> MediaResult<Bytes>;
}

/// Default transfer implementation.
///
/// `http://`/`https://` references are read with a loopback GET;
/// `file://` references and bare paths are read from the filesystem.
#[derive(Clone, Debug)]
pub struct LoopbackTransfer {
    client: reqwest::Client,
}

impl LoopbackTransfer {
    pub fn new(timeout: Duration) -> MediaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MediaError::FetchFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(LoopbackTransfer { client })
    }

    async fn fetch_http(&self, uri: &str) -> MediaResult<Bytes> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| MediaError::FetchFailed(format!("Network request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MediaError::NotFound(uri.to_string()));
        }
        if !status.is_success() {
            return Err(MediaError::FetchFailed(format!(
                "Fetch returned status {}",
                status
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| MediaError::FetchFailed(format!("Failed to read response: {}", e)))
    }

    async fn fetch_file(&self, path: PathBuf) -> MediaResult<Bytes> {
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(MediaError::NotFound(path.display().to_string()));
        }

        let data = tokio::fs::read(&path).await?;
        Ok(Bytes::from(data))
    }
}

#[async_trait]
impl MediaTransfer for LoopbackTransfer {
    async fn fetch(&self, reference: &MediaReference) -> MediaResult<Bytes> {
        let uri = reference.uri();

        let payload = if uri.starts_with("http://") || uri.starts_with("https://") {
            self.fetch_http(uri).await?
        } else if let Some(path) = uri.strip_prefix("file://") {
            self.fetch_file(PathBuf::from(path)).await?
        } else if !uri.contains("://") {
            // Bare filesystem path.
            self.fetch_file(PathBuf::from(uri)).await?
        } else {
            return Err(MediaError::UnsupportedUri(uri.to_string()));
        };

        tracing::debug!(uri = %uri, size_bytes = payload.len(), "Resolved media reference");

        Ok(payload)
    }
}

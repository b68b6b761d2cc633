use crate::traits::{ObjectStorage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use snapvault_core::StorageBackend;
use std::time::Duration;

/// Remote HTTP object store implementation.
///
/// Objects live under `{base_url}/{key}`; writes are plain HTTP PUTs with
/// overwrite semantics on the provider side. An optional bearer token covers
/// stores that require one.
#[derive(Clone, Debug)]
pub struct RemoteStorage {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteStorage {
    /// Create a new RemoteStorage instance
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the store (e.g., "https://store.example.com/v0/b/app/o")
    /// * `token` - Optional bearer token for authenticated stores
    /// * `timeout` - Transport timeout for each request
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(RemoteStorage {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// URL for an object. The key is percent-encoded for transport; the
    /// stored key itself stays exactly as the caller chose it.
    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(key))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[async_trait]
impl ObjectStorage for RemoteStorage {
    async fn put_object(&self, key: &str, data: Bytes) -> StorageResult<String> {
        let url = self.object_url(key);
        let size = data.len();
        let start = std::time::Instant::now();

        let request = self.client.put(&url).body(data);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| StorageError::PutFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::PutFailed(format!(
                "Store returned status {}: {}",
                status, error_text
            )));
        }

        tracing::info!(
            url = %url,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Remote storage put successful"
        );

        Ok(url)
    }

    async fn get_object(&self, key: &str) -> StorageResult<Vec<u8>> {
        let url = self.object_url(key);

        let request = self.client.get(&url);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| StorageError::GetFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::GetFailed(format!(
                "Store returned status {}: {}",
                status, error_text
            )));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| StorageError::GetFailed(format!("Failed to read response: {}", e)))?;

        Ok(data.to_vec())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let url = self.object_url(key);

        let request = self.client.head(&url);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to send request: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_encodes_key_for_transport() {
        let storage = RemoteStorage::new(
            "https://store.example.com/objects/".to_string(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            storage.object_url("sunset.jpg"),
            "https://store.example.com/objects/sunset.jpg"
        );
        // The exact user-chosen key survives; encoding is transport-only.
        assert_eq!(
            storage.object_url("holiday/day one.jpg"),
            "https://store.example.com/objects/holiday%2Fday%20one.jpg"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let storage = RemoteStorage::new(
            "https://store.example.com///".to_string(),
            Some("secret".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            storage.object_url("a.jpg"),
            "https://store.example.com/a.jpg"
        );
    }
}

//! Configuration module
//!
//! Environment-driven configuration for the screen core and its host
//! adapters: storage backend selection, identity provider endpoint, picker
//! options, and the login-gate toggle that selects between the two screen
//! configurations.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const HTTP_TIMEOUT_SECS: u64 = 60;
const CAMERA_ASPECT: (u32, u32) = (16, 9);
const GALLERY_ASPECT: (u32, u32) = (4, 3);
const PICKER_QUALITY: f32 = 1.0;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// When true, acquisition and upload require a signed-in session.
    pub require_login: bool,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub remote_storage_base_url: Option<String>,
    pub remote_storage_token: Option<String>,
    // Identity provider configuration
    pub auth_base_url: Option<String>,
    // Picker configuration
    pub camera_aspect: (u32, u32),
    pub gallery_aspect: (u32, u32),
    pub picker_quality: f32,
    // HTTP client configuration (transport hygiene, not a pipeline timeout)
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|s| StorageBackend::from_str(&s).ok());

        let config = Config {
            require_login: env::var("REQUIRE_LOGIN")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            storage_backend,
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            remote_storage_base_url: env::var("REMOTE_STORAGE_BASE_URL").ok(),
            remote_storage_token: env::var("REMOTE_STORAGE_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            auth_base_url: env::var("AUTH_BASE_URL").ok().filter(|s| !s.is_empty()),
            camera_aspect: env::var("CAMERA_ASPECT")
                .ok()
                .and_then(|s| parse_aspect(&s))
                .unwrap_or(CAMERA_ASPECT),
            gallery_aspect: env::var("GALLERY_ASPECT")
                .ok()
                .and_then(|s| parse_aspect(&s))
                .unwrap_or(GALLERY_ASPECT),
            picker_quality: env::var("PICKER_QUALITY")
                .unwrap_or_else(|_| PICKER_QUALITY.to_string())
                .parse()
                .unwrap_or(PICKER_QUALITY),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(HTTP_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(0.0..=1.0).contains(&self.picker_quality) {
            return Err(anyhow::anyhow!("PICKER_QUALITY must be between 0 and 1"));
        }

        if self.require_login && self.auth_base_url.is_none() {
            return Err(anyhow::anyhow!(
                "AUTH_BASE_URL must be set when REQUIRE_LOGIN is enabled"
            ));
        }

        let backend = self.storage_backend.unwrap_or(StorageBackend::Remote);
        match backend {
            StorageBackend::Remote => {
                if self.remote_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "REMOTE_STORAGE_BASE_URL must be set when using remote storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Parse an aspect hint of the form "16:9" or "4:3".
fn parse_aspect(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once(':')?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            require_login: false,
            storage_backend: Some(StorageBackend::Local),
            local_storage_path: Some("/tmp/snapvault".to_string()),
            local_storage_base_url: Some("http://localhost:3000/media".to_string()),
            remote_storage_base_url: None,
            remote_storage_token: None,
            auth_base_url: None,
            camera_aspect: CAMERA_ASPECT,
            gallery_aspect: GALLERY_ASPECT,
            picker_quality: PICKER_QUALITY,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }

    #[test]
    fn parse_aspect_accepts_ratio_pairs() {
        assert_eq!(parse_aspect("16:9"), Some((16, 9)));
        assert_eq!(parse_aspect(" 4 : 3 "), Some((4, 3)));
        assert_eq!(parse_aspect("0:3"), None);
        assert_eq!(parse_aspect("wide"), None);
    }

    #[test]
    fn validate_requires_auth_url_when_login_gated() {
        let mut config = base_config();
        config.require_login = true;
        assert!(config.validate().is_err());

        config.auth_base_url = Some("https://identity.example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_requires_backend_specific_settings() {
        let mut config = base_config();
        config.local_storage_path = None;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.storage_backend = Some(StorageBackend::Remote);
        assert!(config.validate().is_err());
        config.remote_storage_base_url = Some("https://store.example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_quality() {
        let mut config = base_config();
        config.picker_quality = 1.5;
        assert!(config.validate().is_err());
    }
}

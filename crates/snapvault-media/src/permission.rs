//! Camera capability request
//!
//! The screen asks the host for camera consent exactly once at startup.
//! Denial is non-fatal: it produces a one-shot notice and the gallery path
//! stays reachable. The decision is neither persisted nor re-prompted.

use async_trait::async_trait;
use snapvault_core::PermissionStatus;

use crate::error::MediaResult;

/// Host seam for the one-time camera capability request.
#[async_trait]
pub trait CameraPermission: Send + Sync {
    async fn request_camera_permission(&self) -> MediaResult<PermissionStatus>;
}

/// Fixed-answer permission adapter for hosts without a consent dialog
/// (tests, CLI drivers).
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(PermissionStatus);

impl StaticPermission {
    pub fn granted() -> Self {
        StaticPermission(PermissionStatus::Granted)
    }

    pub fn denied() -> Self {
        StaticPermission(PermissionStatus::Denied)
    }
}

#[async_trait]
impl CameraPermission for StaticPermission {
    async fn request_camera_permission(&self) -> MediaResult<PermissionStatus> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_permission_answers_fixed_status() {
        let granted = StaticPermission::granted();
        assert!(granted
            .request_camera_permission()
            .await
            .unwrap()
            .is_granted());

        let denied = StaticPermission::denied();
        assert!(!denied
            .request_camera_permission()
            .await
            .unwrap()
            .is_granted());
    }
}

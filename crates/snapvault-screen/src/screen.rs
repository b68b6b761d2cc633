//! The screen pipeline.
//!
//! Operations map one-to-one to user gestures: initialize (screen mount),
//! login, capture, pick, upload. Every operation is phase-guarded so only
//! one can be in flight, takes the screen state by reference, and returns
//! its result explicitly. The upload pipeline resolves the held media
//! reference to bytes over the loopback transfer, then writes them to the
//! object store under the user-chosen name.

use std::sync::Arc;

use snapvault_auth::IdentityProvider;
use snapvault_core::{
    validate_upload_name, Acquisition, AuthSession, Config, MediaReference, ScreenPhase,
    UploadOutcome,
};
use snapvault_media::{CameraPermission, MediaError, MediaSource, MediaTransfer, PickerOptions};
use snapvault_storage::{ObjectStorage, StorageError};

use crate::error::ScreenError;
use crate::state::ScreenState;

const PERMISSION_NOTICE: &str = "Camera permission is required to take photos.";

/// Screen configuration.
///
/// The screen ships in two configurations, with and without a login gate,
/// selected by `require_login`.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub require_login: bool,
    pub camera_options: PickerOptions,
    pub gallery_options: PickerOptions,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            require_login: true,
            camera_options: PickerOptions::camera(),
            gallery_options: PickerOptions::gallery(),
        }
    }
}

impl ScreenConfig {
    pub fn from_config(config: &Config) -> Self {
        ScreenConfig {
            require_login: config.require_login,
            camera_options: PickerOptions {
                aspect_ratio: config.camera_aspect,
                quality: config.picker_quality,
                editable: true,
            },
            gallery_options: PickerOptions {
                aspect_ratio: config.gallery_aspect,
                quality: config.picker_quality,
                editable: true,
            },
        }
    }
}

/// Why an in-flight upload came back without a stored object.
#[derive(Debug, thiserror::Error)]
enum TransferFailure {
    #[error("{0}")]
    Fetch(#[from] MediaError),

    #[error("{0}")]
    Store(#[from] StorageError),
}

/// The screen's operations over its host seams.
///
/// Holds no transient state of its own; callers own a [`ScreenState`] and
/// pass it to each operation.
pub struct Screen {
    config: ScreenConfig,
    permission: Arc<dyn CameraPermission>,
    source: Arc<dyn MediaSource>,
    transfer: Arc<dyn MediaTransfer>,
    identity: Arc<dyn IdentityProvider>,
    storage: Arc<dyn ObjectStorage>,
}

impl Screen {
    pub fn new(
        config: ScreenConfig,
        permission: Arc<dyn CameraPermission>,
        source: Arc<dyn MediaSource>,
        transfer: Arc<dyn MediaTransfer>,
        identity: Arc<dyn IdentityProvider>,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Screen {
            config,
            permission,
            source,
            transfer,
            identity,
            storage,
        }
    }

    /// Run-once startup step: request camera consent, best-effort.
    ///
    /// Denial (or an adapter failure) records a one-shot notice and is
    /// otherwise non-fatal; the gallery path stays reachable and the
    /// decision is never re-prompted or persisted.
    pub async fn initialize(&self, state: &mut ScreenState) {
        if state.permission_requested {
            return;
        }
        state.permission_requested = true;

        match self.permission.request_camera_permission().await {
            Ok(status) if status.is_granted() => {}
            Ok(_) => {
                tracing::warn!("Camera permission denied");
                state.set_permission_notice(PERMISSION_NOTICE.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Camera permission request failed");
                state.set_permission_notice(PERMISSION_NOTICE.to_string());
            }
        }
    }

    /// Exchange the credentials held in state for a signed-in session.
    ///
    /// Success clears the credential fields (they are never retained after
    /// use); rejection preserves them and surfaces the provider's reason
    /// verbatim.
    pub async fn login(&self, state: &mut ScreenState) -> Result<(), ScreenError> {
        self.begin(state, ScreenPhase::Authenticating)?;

        let result = self
            .identity
            .sign_in(&state.email, &state.password)
            .await;
        state.phase = ScreenPhase::Idle;

        match result {
            Ok(()) => {
                state.session = AuthSession::SignedIn;
                state.clear_credentials();
                tracing::info!("Login successful");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login rejected");
                Err(e.into())
            }
        }
    }

    /// Capture a new photo with the camera.
    pub async fn capture_photo(&self, state: &mut ScreenState) -> Result<Acquisition, ScreenError> {
        let options = self.config.camera_options.clone();
        self.acquire(state, options, true).await
    }

    /// Pick an existing photo from the gallery.
    pub async fn pick_from_gallery(
        &self,
        state: &mut ScreenState,
    ) -> Result<Acquisition, ScreenError> {
        let options = self.config.gallery_options.clone();
        self.acquire(state, options, false).await
    }

    async fn acquire(
        &self,
        state: &mut ScreenState,
        options: PickerOptions,
        camera: bool,
    ) -> Result<Acquisition, ScreenError> {
        self.ensure_signed_in(state)?;
        self.begin(state, ScreenPhase::Acquiring)?;

        let result = if camera {
            self.source.capture_image(&options).await
        } else {
            self.source.pick_image(&options).await
        };
        state.phase = ScreenPhase::Idle;

        match result {
            Ok(Acquisition::Picked(reference)) => {
                tracing::debug!(uri = %reference, "Media acquired");
                state.media = Some(reference.clone());
                Ok(Acquisition::Picked(reference))
            }
            // Dismissal leaves whatever was already held untouched.
            Ok(Acquisition::Cancelled) => Ok(Acquisition::Cancelled),
            Err(e) => Err(ScreenError::Picker(e)),
        }
    }

    /// Upload the held media under the name in state.
    ///
    /// Preconditions fail fast with `Err` before anything is in flight: the
    /// name must be non-blank after trimming and a media reference must be
    /// held. Once in flight, the result is always an [`UploadOutcome`]:
    /// `Completed` clears the reference and name; `Failed` is logged and
    /// preserves both so the user can retry.
    pub async fn upload(&self, state: &mut ScreenState) -> Result<UploadOutcome, ScreenError> {
        self.ensure_signed_in(state)?;
        if state.phase != ScreenPhase::Idle {
            return Err(ScreenError::Busy { phase: state.phase });
        }

        validate_upload_name(&state.upload_name)?;
        let media = state.media.clone().ok_or(ScreenError::NoMedia)?;

        // The destination key is the name exactly as typed, untrimmed.
        let key = state.upload_name.clone();
        state.phase = ScreenPhase::Uploading;

        let start = std::time::Instant::now();
        let result = self.transfer_and_store(&media, &key).await;
        state.phase = ScreenPhase::Idle;

        match result {
            Ok((url, size)) => {
                state.media = None;
                state.upload_name.clear();
                tracing::info!(
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Upload complete"
                );
                Ok(UploadOutcome::Completed { key, url })
            }
            Err(failure) => {
                tracing::error!(key = %key, error = %failure, "Upload failed");
                Ok(UploadOutcome::Failed {
                    reason: failure.to_string(),
                })
            }
        }
    }

    /// Fetch the payload, then write it. The fetch strictly precedes the
    /// write; the transmitted payload is exactly the fetched one.
    async fn transfer_and_store(
        &self,
        media: &MediaReference,
        key: &str,
    ) -> Result<(String, usize), TransferFailure> {
        let payload = self.transfer.fetch(media).await?;
        let size = payload.len();
        let url = self.storage.put_object(key, payload).await?;
        Ok((url, size))
    }

    fn ensure_signed_in(&self, state: &ScreenState) -> Result<(), ScreenError> {
        if self.config.require_login && !state.session.is_signed_in() {
            return Err(ScreenError::SignedOut);
        }
        Ok(())
    }

    fn begin(&self, state: &mut ScreenState, next: ScreenPhase) -> Result<(), ScreenError> {
        if state.phase != ScreenPhase::Idle {
            return Err(ScreenError::Busy { phase: state.phase });
        }
        state.phase = next;
        Ok(())
    }
}

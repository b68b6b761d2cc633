use snapvault_auth::AuthError;
use snapvault_core::{ScreenPhase, ValidationError};
use snapvault_media::MediaError;
use thiserror::Error;

/// Errors that prevent a screen operation from starting.
///
/// Transfer failures are not represented here: once an upload is in flight,
/// its failure is reported through `UploadOutcome::Failed` so the
/// presentation layer has to render it.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No media selected")]
    NoMedia,

    #[error("Operation already in flight: {phase}")]
    Busy { phase: ScreenPhase },

    #[error("Sign-in required")]
    SignedOut,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Picker(#[from] MediaError),
}

use thiserror::Error;

/// Media acquisition and transfer errors
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Picker failed: {0}")]
    PickerFailed(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Media not found: {0}")]
    NotFound(String),

    #[error("Unsupported media URI: {0}")]
    UnsupportedUri(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for media operations
pub type MediaResult<T> = Result<T, MediaError>;

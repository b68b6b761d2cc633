//! Filesystem-backed media source
//!
//! Hosts without a native picker (the CLI driver, test harnesses) resolve a
//! preselected filesystem path instead of opening a dialog. Capture and pick
//! behave identically here; the options only matter to real picker UIs.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use snapvault_core::{Acquisition, MediaReference};

use crate::error::{MediaError, MediaResult};
use crate::picker::{MediaSource, PickerOptions};

/// Media source that yields a preselected file, or `Cancelled` when no file
/// was selected.
#[derive(Debug, Clone, Default)]
pub struct PathMediaSource {
    path: Option<PathBuf>,
}

impl PathMediaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PathMediaSource {
            path: Some(path.into()),
        }
    }

    /// A source with nothing selected; every acquisition resolves to
    /// `Cancelled`, like dismissing the picker.
    pub fn empty() -> Self {
        PathMediaSource { path: None }
    }

    async fn resolve(&self) -> MediaResult<Acquisition> {
        let Some(path) = &self.path else {
            return Ok(Acquisition::Cancelled);
        };

        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(MediaError::PickerFailed(format!(
                "Invalid media path: {}",
                path.display()
            )));
        }

        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(MediaError::NotFound(path.display().to_string()));
        }

        Ok(Acquisition::Picked(MediaReference::new(format!(
            "file://{}",
            path.display()
        ))))
    }
}

#[async_trait]
impl MediaSource for PathMediaSource {
    async fn capture_image(&self, _options: &PickerOptions) -> MediaResult<Acquisition> {
        self.resolve().await
    }

    async fn pick_image(&self, _options: &PickerOptions) -> MediaResult<Acquisition> {
        self.resolve().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn picks_existing_file_as_file_uri() {
        let file = NamedTempFile::new().unwrap();
        let source = PathMediaSource::new(file.path());

        let acquisition = source.pick_image(&PickerOptions::gallery()).await.unwrap();
        let reference = acquisition.reference().expect("picked");
        assert!(reference.uri().starts_with("file://"));
        assert!(reference.uri().ends_with(&file.path().display().to_string()));
    }

    #[tokio::test]
    async fn empty_source_cancels() {
        let source = PathMediaSource::empty();
        let acquisition = source
            .capture_image(&PickerOptions::camera())
            .await
            .unwrap();
        assert!(acquisition.is_cancelled());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = PathMediaSource::new("/nonexistent/photo.jpg");
        let result = source.pick_image(&PickerOptions::gallery()).await;
        assert!(matches!(result, Err(MediaError::NotFound(_))));
    }

    #[tokio::test]
    async fn parent_dir_components_rejected() {
        let source = PathMediaSource::new("photos/../secret.jpg");
        let result = source.pick_image(&PickerOptions::gallery()).await;
        assert!(matches!(result, Err(MediaError::PickerFailed(_))));
    }
}

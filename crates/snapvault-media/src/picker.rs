//! Media source abstraction
//!
//! One trait covers both acquisition modes the screen exposes: capturing a
//! new photo with the camera and picking an existing one from the gallery.
//! Host adapters implement it over the platform's native picker UI.

use async_trait::async_trait;
use snapvault_core::Acquisition;

use crate::error::MediaResult;

/// Options handed to the host picker.
///
/// Both modes request a single still image, editable/croppable to the
/// aspect hint, at the given quality.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    /// Crop aspect hint as (width, height).
    pub aspect_ratio: (u32, u32),
    /// Capture quality in 0..=1.
    pub quality: f32,
    /// Whether the picker lets the user edit/crop before confirming.
    pub editable: bool,
}

impl PickerOptions {
    /// Default camera options: 16:9, maximum quality, editable.
    pub fn camera() -> Self {
        PickerOptions {
            aspect_ratio: (16, 9),
            quality: 1.0,
            editable: true,
        }
    }

    /// Default gallery options: 4:3, maximum quality, editable.
    pub fn gallery() -> Self {
        PickerOptions {
            aspect_ratio: (4, 3),
            quality: 1.0,
            editable: true,
        }
    }
}

/// Media source abstraction
///
/// Each call suspends until the host's picker UI resolves or is dismissed.
/// Dismissal yields `Acquisition::Cancelled`, which is not an error and must
/// leave existing screen state untouched. Only one acquisition is in flight
/// at a time; the screen's phase guard enforces that.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Capture a single still image with the camera.
    async fn capture_image(&self, options: &PickerOptions) -> MediaResult<Acquisition>;

    /// Pick a single still image from the gallery.
    async fn pick_image(&self, options: &PickerOptions) -> MediaResult<Acquisition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_screen_defaults() {
        let camera = PickerOptions::camera();
        assert_eq!(camera.aspect_ratio, (16, 9));
        assert_eq!(camera.quality, 1.0);
        assert!(camera.editable);

        let gallery = PickerOptions::gallery();
        assert_eq!(gallery.aspect_ratio, (4, 3));
        assert_eq!(gallery.quality, 1.0);
        assert!(gallery.editable);
    }
}

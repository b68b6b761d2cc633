//! Snapvault Media Library
//!
//! Host-platform seams for image acquisition: the picker (`MediaSource`),
//! the one-time camera capability request (`CameraPermission`), and the
//! loopback byte-fetch that resolves a picker-issued URI to a payload
//! (`MediaTransfer`). The screen crate orchestrates these; nothing here
//! holds state between calls.

pub mod error;
pub mod path_source;
pub mod permission;
pub mod picker;
pub mod transfer;

// Re-export commonly used types
pub use error::{MediaError, MediaResult};
pub use path_source::PathMediaSource;
pub use permission::{CameraPermission, StaticPermission};
pub use picker::{MediaSource, PickerOptions};
pub use transfer::{LoopbackTransfer, MediaTransfer};

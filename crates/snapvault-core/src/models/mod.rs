//! Domain models shared across Snapvault components.

pub mod media;
pub mod screen;
pub mod session;

pub use media::{Acquisition, MediaReference};
pub use screen::{PermissionStatus, ScreenPhase, UploadOutcome};
pub use session::AuthSession;

//! Snapvault Screen Library
//!
//! The screen-core behind the photo-upload screen: an explicit state struct,
//! a one-operation-at-a-time phase guard, and the acquisition-to-upload
//! pipeline over the host seams (permission, picker, transfer, identity,
//! storage). The presentation layer renders `ScreenState` and the returned
//! outcomes; nothing here draws UI.

pub mod error;
pub mod screen;
pub mod state;

// Re-export commonly used types
pub use error::ScreenError;
pub use screen::{Screen, ScreenConfig};
pub use state::ScreenState;

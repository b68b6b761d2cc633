//! Snapvault Core Library
//!
//! This crate provides the domain models, configuration, and validation
//! shared across all Snapvault components.

pub mod config;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use models::{
    Acquisition, AuthSession, MediaReference, PermissionStatus, ScreenPhase, UploadOutcome,
};
pub use storage_types::StorageBackend;
pub use validation::{validate_upload_name, ValidationError};

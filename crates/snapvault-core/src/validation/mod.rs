//! Validation modules

pub mod upload_name;

pub use upload_name::{validate_upload_name, ValidationError};

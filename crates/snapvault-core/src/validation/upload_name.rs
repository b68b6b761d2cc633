//! Upload name validation.
//!
//! The name a user types becomes the destination object key exactly as
//! typed; trimming applies to the blank check only. Duplicate keys and
//! storage-unsafe characters are accepted (the store overwrites,
//! last-writer-wins).

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Upload name must not be empty")]
    EmptyUploadName,
}

/// Check that an upload name is non-blank after trimming.
pub fn validate_upload_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyUploadName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_only_names() {
        assert_eq!(
            validate_upload_name(""),
            Err(ValidationError::EmptyUploadName)
        );
        assert_eq!(
            validate_upload_name("   "),
            Err(ValidationError::EmptyUploadName)
        );
        assert_eq!(
            validate_upload_name("\t\n"),
            Err(ValidationError::EmptyUploadName)
        );
    }

    #[test]
    fn accepts_names_with_surrounding_whitespace() {
        // Trimming is for the blank check only; " sunset.jpg " is a valid
        // (and exact) destination key.
        assert!(validate_upload_name(" sunset.jpg ").is_ok());
        assert!(validate_upload_name("sunset.jpg").is_ok());
    }

    #[test]
    fn accepts_unsanitized_key_characters() {
        assert!(validate_upload_name("holiday/day one?.jpg").is_ok());
        assert!(validate_upload_name("..").is_ok());
    }
}

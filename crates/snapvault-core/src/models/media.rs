use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Opaque handle to a captured or selected image on the device.
///
/// The wrapped value is a device-local URI (`file://...` on filesystem hosts,
/// `http://localhost/...` for picker-managed transient storage). The handle is
/// owned by the screen state: a new acquisition replaces it wholesale, a
/// successful upload clears it, a failed upload leaves it in place so the
/// user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference(String);

impl MediaReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl Display for MediaReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Result of one picker interaction.
///
/// Dismissing the picker is not an error: `Cancelled` leaves whatever
/// reference the screen already holds untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Picked(MediaReference),
    Cancelled,
}

impl Acquisition {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Acquisition::Cancelled)
    }

    pub fn reference(&self) -> Option<&MediaReference> {
        match self {
            Acquisition::Picked(reference) => Some(reference),
            Acquisition::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_reference_exposes_uri() {
        let reference = MediaReference::new("file:///tmp/photo.jpg");
        assert_eq!(reference.uri(), "file:///tmp/photo.jpg");
        assert_eq!(reference.to_string(), "file:///tmp/photo.jpg");
    }

    #[test]
    fn acquisition_accessors() {
        let picked = Acquisition::Picked(MediaReference::new("file:///a.jpg"));
        assert!(!picked.is_cancelled());
        assert_eq!(picked.reference().unwrap().uri(), "file:///a.jpg");

        let cancelled = Acquisition::Cancelled;
        assert!(cancelled.is_cancelled());
        assert!(cancelled.reference().is_none());
    }
}

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Which operation, if any, the screen currently has in flight.
///
/// Presentation layers keep operations mutually exclusive by disabling
/// controls; the phase makes that guard explicit so non-UI callers cannot
/// start a second operation while one is running. `Uploading` doubles as the
/// in-flight flag the presentation layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenPhase {
    #[default]
    Idle,
    Acquiring,
    Authenticating,
    Uploading,
}

impl Display for ScreenPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ScreenPhase::Idle => write!(f, "idle"),
            ScreenPhase::Acquiring => write!(f, "acquiring"),
            ScreenPhase::Authenticating => write!(f, "authenticating"),
            ScreenPhase::Uploading => write!(f, "uploading"),
        }
    }
}

/// Terminal result of one upload invocation.
///
/// `Failed` is part of the contract, not a logging side channel: the
/// presentation layer must render it. The reason carries the collaborator's
/// message; the screen state keeps the media reference and name so the user
/// can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Completed { key: String, url: String },
    Failed { reason: String },
}

impl UploadOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, UploadOutcome::Completed { .. })
    }
}

/// Host platform's answer to the one-time camera capability request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_defaults_to_idle() {
        assert_eq!(ScreenPhase::default(), ScreenPhase::Idle);
        assert_eq!(ScreenPhase::Uploading.to_string(), "uploading");
    }

    #[test]
    fn outcome_completed_detection() {
        let completed = UploadOutcome::Completed {
            key: "sunset.jpg".to_string(),
            url: "http://localhost:3000/media/sunset.jpg".to_string(),
        };
        assert!(completed.is_completed());

        let failed = UploadOutcome::Failed {
            reason: "connection reset".to_string(),
        };
        assert!(!failed.is_completed());
    }
}

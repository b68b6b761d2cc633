use snapvault_core::{AuthSession, MediaReference, ScreenPhase};

/// Transient screen state.
///
/// An explicit struct rather than ambient component state so the pipeline's
/// state machine is unit-testable without a UI harness: the presentation
/// layer owns one of these and hands it to every `Screen` operation by
/// reference.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// Credential fields; cleared on successful sign-in, preserved on
    /// rejection so the user can correct and retry.
    pub email: String,
    pub password: String,
    /// Handle to the acquired image, if any. Replaced wholesale by a new
    /// acquisition, cleared by a successful upload, kept by a failed one.
    pub media: Option<MediaReference>,
    /// Destination object key as the user typed it.
    pub upload_name: String,
    pub phase: ScreenPhase,
    pub session: AuthSession,
    /// Whether the one-time camera capability request already ran.
    pub permission_requested: bool,
    permission_notice: Option<String>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-flight flag the presentation layer reads.
    pub fn is_uploading(&self) -> bool {
        self.phase == ScreenPhase::Uploading
    }

    pub fn clear_credentials(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    pub(crate) fn set_permission_notice(&mut self, notice: String) {
        self.permission_notice = Some(notice);
    }

    /// One-shot read of the permission-denied notice; the notice is shown
    /// once and never re-surfaced.
    pub fn take_permission_notice(&mut self) -> Option<String> {
        self.permission_notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_and_signed_out() {
        let state = ScreenState::new();
        assert_eq!(state.phase, ScreenPhase::Idle);
        assert!(!state.session.is_signed_in());
        assert!(state.media.is_none());
        assert!(!state.is_uploading());
        assert!(!state.permission_requested);
    }

    #[test]
    fn permission_notice_is_one_shot() {
        let mut state = ScreenState::new();
        state.set_permission_notice("no camera".to_string());
        assert_eq!(state.take_permission_notice().as_deref(), Some("no camera"));
        assert!(state.take_permission_notice().is_none());
    }
}

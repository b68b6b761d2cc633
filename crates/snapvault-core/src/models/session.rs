use serde::{Deserialize, Serialize};

/// Signed-in state produced by the external identity provider.
///
/// The only transition is `SignedOut` to `SignedIn` on a successful
/// credential exchange. There is no sign-out path and the session is not
/// persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthSession {
    #[default]
    SignedOut,
    SignedIn,
}

impl AuthSession {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthSession::SignedIn)
    }
}

//! Snapvault Auth Library
//!
//! Identity provider seam for the screen's login operation. The provider is
//! external; this crate only carries the credential exchange and surfaces
//! the provider's rejection reason verbatim.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider rejected the credentials; the reason is the provider's
    /// message, surfaced verbatim to the user.
    #[error("{reason}")]
    Rejected { reason: String },

    #[error("Auth request failed: {0}")]
    Network(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Identity provider seam.
///
/// `sign_in` suspends until the provider responds. Success carries no
/// payload: the screen only tracks the signed-in boolean, and credentials
/// are never retained after the exchange.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()>;
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extract the provider's rejection reason from an error response body.
///
/// Providers answer either `{"error": {"message": "..."}}` or plain text;
/// whichever arrives is what the user sees.
fn rejection_reason(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(detail),
        }) => detail.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => "Sign-in rejected".to_string(),
    }
}

/// HTTP identity provider client.
#[derive(Clone, Debug)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    /// # Arguments
    /// * `base_url` - Provider endpoint base (e.g., "https://identity.example.com")
    /// * `timeout` - Transport timeout for the exchange
    pub fn new(base_url: String, timeout: Duration) -> AuthResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpIdentityProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn sign_in_url(&self) -> String {
        format!("{}/v1/accounts:signInWithPassword", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        let response = self
            .client
            .post(self.sign_in_url())
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = rejection_reason(&body);
            tracing::debug!(status = %status, reason = %reason, "Sign-in rejected by provider");
            return Err(AuthError::Rejected { reason });
        }

        Ok(())
    }
}

/// Fixed-answer identity provider for tests and configurations without an
/// auth gate.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    rejection: Option<String>,
}

impl StaticIdentity {
    /// Accepts any credentials.
    pub fn accepting() -> Self {
        StaticIdentity { rejection: None }
    }

    /// Rejects any credentials with the given reason.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        StaticIdentity {
            rejection: Some(reason.into()),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn sign_in(&self, _email: &str, _password: &str) -> AuthResult<()> {
        match &self.rejection {
            None => Ok(()),
            Some(reason) => Err(AuthError::Rejected {
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_reason_prefers_provider_message() {
        let body = r#"{"error":{"message":"INVALID_PASSWORD"}}"#;
        assert_eq!(rejection_reason(body), "INVALID_PASSWORD");
    }

    #[test]
    fn rejection_reason_falls_back_to_body_text() {
        assert_eq!(rejection_reason("account disabled"), "account disabled");
        assert_eq!(rejection_reason("   "), "Sign-in rejected");
        assert_eq!(rejection_reason(""), "Sign-in rejected");
    }

    #[test]
    fn rejected_error_displays_reason_verbatim() {
        let err = AuthError::Rejected {
            reason: "INVALID_PASSWORD".to_string(),
        };
        assert_eq!(err.to_string(), "INVALID_PASSWORD");
    }

    #[test]
    fn sign_in_url_is_rooted_at_base() {
        let provider = HttpIdentityProvider::new(
            "https://identity.example.com/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            provider.sign_in_url(),
            "https://identity.example.com/v1/accounts:signInWithPassword"
        );
    }

    #[tokio::test]
    async fn static_identity_answers_fixed_result() {
        assert!(StaticIdentity::accepting()
            .sign_in("a@b.c", "pw")
            .await
            .is_ok());

        let err = StaticIdentity::rejecting("no such user")
            .sign_in("a@b.c", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no such user");
    }
}

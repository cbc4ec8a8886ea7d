//! Identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session issuance, refresh and revocation belong to the external provider.
//! The edge guard and the auth routes only talk to it through
//! [`IdentityProvider`], which keeps the routes testable with an in-memory
//! provider.

use access::Session;

/// Errors produced by identity provider calls.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("identity provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("identity provider rejected request: status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The provider response body could not be parsed.
    #[error("identity provider response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl IdentityError {
    /// True when the provider understood the request and refused the
    /// credentials (bad password, unknown or revoked token).
    #[must_use]
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, Self::Rejected { status: 400 | 401 | 403 | 422, .. })
    }
}

/// A session together with the tokens that back it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub session: Session,
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: i64,
}

/// Operations consumed from the identity provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an access token into a session.
    ///
    /// `Ok(None)` means the provider does not recognise the token.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when the provider cannot be reached or
    /// answers with an unexpected status.
    async fn resolve_session(&self, access_token: &str) -> Result<Option<Session>, IdentityError>;

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] for bad credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<IssuedSession, IdentityError>;

    /// Register a new account. `Ok(None)` when email confirmation is pending.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] when the provider refuses the signup.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<IssuedSession>, IdentityError>;

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] for an unknown or revoked token.
    async fn refresh(&self, refresh_token: &str) -> Result<IssuedSession, IdentityError>;

    /// Revoke the session behind `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider call fails.
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
}

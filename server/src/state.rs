//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the edge guard via the
//! `State` extractor. Everything inside is immutable after startup, so
//! requests never share mutable state.

use std::sync::Arc;

use crate::services::identity::IdentityProvider;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    /// Whether auth cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, cookie_secure: bool) -> Self {
        Self { identity, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use access::{Session, SessionUser};

    use super::*;
    use crate::services::identity::{IdentityError, IssuedSession};

    pub const VALID_TOKEN: &str = "valid-access-token";
    pub const VALID_REFRESH: &str = "valid-refresh-token";
    pub const LEARNER_EMAIL: &str = "learner@example.com";
    pub const LEARNER_PASSWORD: &str = "correct-horse";

    /// How the mock provider answers `resolve_session`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ProviderMode {
        /// `VALID_TOKEN` resolves, anything else is unknown.
        Healthy,
        /// Every call fails with a transport error.
        Down,
    }

    pub fn learner_session() -> Session {
        Session {
            user: SessionUser { id: "user-1".to_owned(), email: Some(LEARNER_EMAIL.to_owned()) },
            expires_at: Some(1_900_000_000),
        }
    }

    pub fn issued() -> IssuedSession {
        IssuedSession {
            session: learner_session(),
            access_token: VALID_TOKEN.to_owned(),
            refresh_token: VALID_REFRESH.to_owned(),
            expires_in: 3600,
        }
    }

    /// In-memory identity provider that records every call.
    pub struct MockIdentity {
        pub mode: ProviderMode,
        pub confirm_signups: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockIdentity {
        pub fn new(mode: ProviderMode) -> Self {
            Self { mode, confirm_signups: true, calls: Mutex::new(Vec::new()) }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), IdentityError> {
            self.calls.lock().unwrap().push(call);
            match self.mode {
                ProviderMode::Healthy => Ok(()),
                ProviderMode::Down => Err(IdentityError::Transport("connection refused".into())),
            }
        }
    }

    #[async_trait::async_trait]
    impl IdentityProvider for MockIdentity {
        async fn resolve_session(&self, access_token: &str) -> Result<Option<Session>, IdentityError> {
            self.record(format!("resolve:{access_token}"))?;
            Ok((access_token == VALID_TOKEN).then(learner_session))
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<IssuedSession, IdentityError> {
            self.record(format!("sign_in:{email}"))?;
            if email == LEARNER_EMAIL && password == LEARNER_PASSWORD {
                Ok(issued())
            } else {
                Err(IdentityError::Rejected { status: 400, message: "Invalid login credentials".into() })
            }
        }

        async fn sign_up(&self, email: &str, _password: &str) -> Result<Option<IssuedSession>, IdentityError> {
            self.record(format!("sign_up:{email}"))?;
            Ok(self.confirm_signups.then(issued))
        }

        async fn refresh(&self, refresh_token: &str) -> Result<IssuedSession, IdentityError> {
            self.record(format!("refresh:{refresh_token}"))?;
            if refresh_token == VALID_REFRESH {
                Ok(issued())
            } else {
                Err(IdentityError::Rejected { status: 400, message: "Invalid Refresh Token".into() })
            }
        }

        async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
            self.record(format!("sign_out:{access_token}"))
        }
    }

    /// Create a test `AppState` around a mock provider, returning both.
    pub fn test_app_state(mode: ProviderMode) -> (AppState, Arc<MockIdentity>) {
        let mock = Arc::new(MockIdentity::new(mode));
        (AppState::new(mock.clone(), false), mock)
    }
}

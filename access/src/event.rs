//! Session lifecycle events delivered to the client observer.

use serde::{Deserialize, Serialize};

use crate::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    SessionExpired,
}

impl AuthEventKind {
    /// Events that end the session whatever payload they carry.
    #[must_use]
    pub fn ends_session(self) -> bool {
        matches!(self, Self::SignedOut | Self::SessionExpired)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub session: Option<Session>,
}

impl AuthEvent {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { kind: AuthEventKind::SignedIn, session: Some(session) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { kind: AuthEventKind::SignedOut, session: None }
    }

    #[must_use]
    pub fn token_refreshed(session: Session) -> Self {
        Self { kind: AuthEventKind::TokenRefreshed, session: Some(session) }
    }

    #[must_use]
    pub fn session_expired() -> Self {
        Self { kind: AuthEventKind::SessionExpired, session: None }
    }

    /// Session the observer should hold after this event.
    #[must_use]
    pub fn resulting_session(&self) -> Option<&Session> {
        if self.kind.ends_session() { None } else { self.session.as_ref() }
    }
}

//! Observed session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout shell keeps one `RwSignal<SessionState>` and feeds it the
//! initial provider snapshot plus every later auth event. Transitions return
//! whether anything changed so the signal only notifies on real changes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use access::{AuthEvent, Session, SessionStatus};

/// Refresh the access token this many seconds before it expires.
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// Session as seen by the layout observer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Initial snapshot not yet received.
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    fn from_session(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Authenticated)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Loading | Self::Anonymous => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Policy input for this state; `None` while still loading.
    pub fn status(&self) -> Option<SessionStatus> {
        match self {
            Self::Loading => None,
            Self::Anonymous => Some(SessionStatus::Absent),
            Self::Authenticated(_) => Some(SessionStatus::Present),
        }
    }

    /// Apply the initial provider snapshot.
    ///
    /// Ignored once any event has been applied: a late snapshot must not
    /// overwrite a fresher event.
    pub fn resolve_initial(&mut self, snapshot: Option<Session>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.replace(Self::from_session(snapshot))
    }

    /// Apply an auth event. Returns `true` if the state changed.
    pub fn apply_event(&mut self, event: &AuthEvent) -> bool {
        self.replace(Self::from_session(event.resulting_session().cloned()))
    }

    fn replace(&mut self, next: Self) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

/// Whether a session should be refreshed at `now` (Unix seconds).
pub fn needs_refresh(session: &Session, now: i64) -> bool {
    session.expires_at.is_some_and(|at| at - now <= REFRESH_MARGIN_SECS)
}

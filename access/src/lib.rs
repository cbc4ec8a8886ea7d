//! Shared session model and navigation policy for `server` and `client`.
//!
//! The edge guard (server middleware) and the session observer (hydrated
//! layout) enforce the same rule at two different points in a request's
//! life. Both read the route table and the decision logic from this crate so
//! the two enforcement points cannot drift apart.

pub mod chrome;
pub mod event;
pub mod policy;
pub mod route;

use serde::{Deserialize, Serialize};

pub use chrome::{HeaderIdentity, LayoutChrome};
pub use event::{AuthEvent, AuthEventKind};
pub use policy::{NavigationDecision, SessionStatus, decide};
pub use route::{AUTH_ROUTE, DASHBOARD_ROUTE, PUBLIC_ROUTES, ROOT_ROUTE, RouteCategory, classify, is_guarded};

/// Identity carried by a provider-issued session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider user identifier.
    pub id: String,
    /// Login email, if the provider returned one.
    pub email: Option<String>,
}

/// Proof of authentication for the current user.
///
/// Owned by the identity provider; this application only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Access-token expiry in seconds since the Unix epoch, when known.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    /// Email shown in the layout chrome, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref().filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

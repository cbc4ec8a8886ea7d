//! Navigation decision for the edge guard.
//!
//! DESIGN
//! ======
//! Resolution failures are treated as "no session". The landing page fails
//! open so a provider outage never makes `/` unreachable; every other path
//! fails closed to the auth screen.

use crate::route::{self, AUTH_ROUTE, DASHBOARD_ROUTE, RouteCategory};

/// Outcome of resolving the request credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The provider returned a live session.
    Present,
    /// No credential, or the provider does not recognise it.
    Absent,
    /// The provider could not be asked (transport or provider error).
    Unresolved,
}

impl SessionStatus {
    /// Collapse a provider lookup into a status.
    pub fn from_lookup<T, E>(lookup: &Result<Option<T>, E>) -> Self {
        match lookup {
            Ok(Some(_)) => Self::Present,
            Ok(None) => Self::Absent,
            Err(_) => Self::Unresolved,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectToAuth,
    RedirectToDashboard,
}

impl NavigationDecision {
    /// Redirect target, or `None` for pass-through.
    #[must_use]
    pub fn location(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToAuth => Some(AUTH_ROUTE),
            Self::RedirectToDashboard => Some(DASHBOARD_ROUTE),
        }
    }
}

/// Decide what to do with a request for `path`.
#[must_use]
pub fn decide(path: &str, status: SessionStatus) -> NavigationDecision {
    let category = route::classify(path);
    match (status, category) {
        (SessionStatus::Unresolved, _) if route::normalize(path) == route::ROOT_ROUTE => NavigationDecision::Allow,
        // Redirecting the auth screen to itself would loop.
        (SessionStatus::Unresolved, RouteCategory::Auth) => NavigationDecision::Allow,
        (SessionStatus::Unresolved, _) => NavigationDecision::RedirectToAuth,
        (SessionStatus::Present, RouteCategory::Auth) => NavigationDecision::RedirectToDashboard,
        (SessionStatus::Absent, RouteCategory::Protected) => NavigationDecision::RedirectToAuth,
        _ => NavigationDecision::Allow,
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;

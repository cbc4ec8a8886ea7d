//! Layout chrome derived from the observed session and the current route.

use crate::Session;
use crate::route::{self, RouteCategory};

/// Header label used when the provider returned no email.
pub const FALLBACK_IDENTITY_LABEL: &str = "Welcome";

/// Identity block rendered in the header next to the logout action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderIdentity {
    pub label: String,
}

/// Which pieces of the app shell are visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutChrome {
    pub sidebar: bool,
    pub footer: bool,
    /// `None` renders an empty header nav; login lives on the auth route.
    pub identity: Option<HeaderIdentity>,
}

impl LayoutChrome {
    /// Sidebar iff a session is present and the route is not the auth screen.
    /// Header identity iff a session is present.
    #[must_use]
    pub fn derive(session: Option<&Session>, path: &str) -> Self {
        let on_auth = route::classify(path) == RouteCategory::Auth;
        let identity = session.map(|s| HeaderIdentity {
            label: s.email().unwrap_or(FALLBACK_IDENTITY_LABEL).to_owned(),
        });
        Self { sidebar: session.is_some() && !on_auth, footer: !on_auth, identity }
    }
}

#[cfg(test)]
#[path = "chrome_test.rs"]
mod tests;

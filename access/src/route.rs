//! Route classification.
//!
//! Every path maps to exactly one [`RouteCategory`]. Anything not listed as
//! public and not under the auth screen is protected.

/// Landing page. Stays reachable when session resolution fails.
pub const ROOT_ROUTE: &str = "/";
/// Sign-in / sign-up screen.
pub const AUTH_ROUTE: &str = "/auth";
/// Authenticated landing page.
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Pages reachable with or without a session.
pub const PUBLIC_ROUTES: [&str; 3] = [ROOT_ROUTE, "/about", "/contact"];

/// Path prefixes that bypass the edge guard entirely.
const UNGUARDED_PREFIXES: [&str; 3] = ["/api", "/pkg", "/assets"];
/// Exact paths that bypass the edge guard entirely.
const UNGUARDED_PATHS: [&str; 2] = ["/favicon.ico", "/healthz"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    /// Reachable with or without a session.
    Public,
    /// The auth screen itself.
    Auth,
    /// Requires a session.
    Protected,
}

/// Strip query/fragment and trailing slashes. The empty path is `/`.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { ROOT_ROUTE } else { trimmed }
}

/// True when `path` equals `prefix` or sits below it on a segment boundary.
fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Classify a request path.
#[must_use]
pub fn classify(path: &str) -> RouteCategory {
    let path = normalize(path);
    if under(path, AUTH_ROUTE) {
        RouteCategory::Auth
    } else if PUBLIC_ROUTES.contains(&path) {
        RouteCategory::Public
    } else {
        RouteCategory::Protected
    }
}

/// Whether the edge guard runs for `path`.
///
/// API routes, compiled framework assets, static files, the favicon and the
/// health probe are outside the policy.
#[must_use]
pub fn is_guarded(path: &str) -> bool {
    let path = normalize(path);
    if UNGUARDED_PATHS.contains(&path) {
        return false;
    }
    !UNGUARDED_PREFIXES.iter().any(|prefix| under(path, prefix))
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

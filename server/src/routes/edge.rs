//! Edge guard: per-request navigation policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs as middleware in front of every page before anything renders. It
//! reads the access-token cookie, asks the identity provider about it and
//! then passes the request through or redirects, using the shared
//! `access::decide` policy. The guard never writes cookies and keeps no
//! state between requests.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use access::SessionStatus;

use super::auth::{ACCESS_COOKIE, cookie_value};
use crate::state::AppState;

/// Resolve the request credential into a [`SessionStatus`].
///
/// A missing cookie is `Absent` without a provider round-trip.
pub(crate) async fn session_status(state: &AppState, jar: &CookieJar) -> SessionStatus {
    let Some(token) = cookie_value(jar, ACCESS_COOKIE) else {
        return SessionStatus::Absent;
    };

    let lookup = state.identity.resolve_session(token).await;
    if let Err(e) = &lookup {
        tracing::warn!(error = %e, "session resolution failed");
    }
    SessionStatus::from_lookup(&lookup)
}

/// Axum middleware applying the navigation policy.
pub async fn guard(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !access::is_guarded(&path) {
        return next.run(request).await;
    }

    let status = session_status(&state, &jar).await;
    let decision = access::decide(&path, status);

    match decision.location() {
        None => {
            tracing::debug!(%path, ?status, "edge guard: allow");
            next.run(request).await
        }
        Some(location) => {
            tracing::info!(%path, ?status, ?decision, "edge guard: redirect");
            Redirect::temporary(location).into_response()
        }
    }
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod tests;

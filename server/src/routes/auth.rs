//! Auth routes: sign-in, sign-up, refresh, sign-out and session lookup.
//!
//! The provider owns the session; these handlers only relay credentials and
//! keep the two auth cookies in step with what the provider issued.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use access::Session;

use crate::services::identity::{IdentityError, IssuedSession};
use crate::state::AppState;

pub const ACCESS_COOKIE: &str = "sb-auth-token";
pub const REFRESH_COOKIE: &str = "sb-refresh-token";
const REFRESH_COOKIE_DAYS: i64 = 30;

/// Non-empty cookie value, if present.
pub(crate) fn cookie_value<'a>(jar: &'a CookieJar, name: &str) -> Option<&'a str> {
    jar.get(name).map(Cookie::value).filter(|v| !v.is_empty())
}

fn auth_cookie(name: &'static str, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn store_session(jar: CookieJar, issued: &IssuedSession, secure: bool) -> CookieJar {
    jar.add(auth_cookie(ACCESS_COOKIE, issued.access_token.clone(), Duration::seconds(issued.expires_in), secure))
        .add(auth_cookie(REFRESH_COOKIE, issued.refresh_token.clone(), Duration::days(REFRESH_COOKIE_DAYS), secure))
}

fn clear_session(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(auth_cookie(ACCESS_COOKIE, String::new(), Duration::ZERO, secure))
        .add(auth_cookie(REFRESH_COOKIE, String::new(), Duration::ZERO, secure))
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

/// Map a provider failure to an HTTP status for the browser.
pub(crate) fn identity_error_to_status(err: &IdentityError) -> StatusCode {
    if err.is_credential_rejection() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::BAD_GATEWAY
    }
}

/// Provider refusals are shown to the user verbatim; outages are not.
fn credential_failure(err: IdentityError) -> Response {
    let status = identity_error_to_status(&err);
    match err {
        IdentityError::Rejected { message, .. } if status == StatusCode::UNAUTHORIZED => error_body(status, message),
        _ => error_body(status, "identity provider unavailable"),
    }
}

#[derive(Serialize)]
pub struct SessionBody {
    pub session: Option<Session>,
}

#[derive(Serialize)]
pub struct SignUpBody {
    pub session: Option<Session>,
    pub confirmation_required: bool,
}

#[derive(Deserialize)]
pub struct CredentialsRequest {
    email: String,
    password: String,
}

impl CredentialsRequest {
    /// Trimmed email and raw password, or `None` when either is blank.
    pub(crate) fn validated(&self) -> Option<(&str, &str)> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return None;
        }
        Some((email, self.password.as_str()))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/session`: current session or `null`.
///
/// When the access cookie is missing or no longer resolves, a refresh cookie
/// is exchanged for a fresh pair so a returning visitor stays signed in.
/// Provider failures are reported as no session, never as an error.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = cookie_value(&jar, ACCESS_COOKIE) {
        match state.identity.resolve_session(token).await {
            Ok(Some(session)) => return Json(SessionBody { session: Some(session) }).into_response(),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "session lookup failed; trying refresh cookie"),
        }
    }

    let Some(refresh_token) = cookie_value(&jar, REFRESH_COOKIE).map(str::to_owned) else {
        return Json(SessionBody { session: None }).into_response();
    };

    match state.identity.refresh(&refresh_token).await {
        Ok(issued) => {
            tracing::info!(user_id = %issued.session.user.id, "session restored from refresh cookie");
            let jar = store_session(jar, &issued, state.cookie_secure);
            (jar, Json(SessionBody { session: Some(issued.session) })).into_response()
        }
        Err(e) if e.is_credential_rejection() => {
            tracing::info!(error = %e, "stale refresh cookie; clearing session cookies");
            let jar = clear_session(jar, state.cookie_secure);
            (jar, Json(SessionBody { session: None })).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "session restore failed; reporting no session");
            Json(SessionBody { session: None }).into_response()
        }
    }
}

/// `POST /api/auth/sign-in`: email + password exchange, sets cookies.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<CredentialsRequest>) -> Response {
    let Some((email, password)) = body.validated() else {
        return error_body(StatusCode::BAD_REQUEST, "email and password are required");
    };

    match state.identity.sign_in(email, password).await {
        Ok(issued) => {
            tracing::info!(user_id = %issued.session.user.id, "signed in");
            let jar = store_session(jar, &issued, state.cookie_secure);
            (jar, Json(SessionBody { session: Some(issued.session) })).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in failed");
            credential_failure(e)
        }
    }
}

/// `POST /api/auth/sign-up`: register; sets cookies when auto-confirmed.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(body): Json<CredentialsRequest>) -> Response {
    let Some((email, password)) = body.validated() else {
        return error_body(StatusCode::BAD_REQUEST, "email and password are required");
    };

    match state.identity.sign_up(email, password).await {
        Ok(Some(issued)) => {
            tracing::info!(user_id = %issued.session.user.id, "signed up");
            let jar = store_session(jar, &issued, state.cookie_secure);
            (jar, Json(SignUpBody { session: Some(issued.session), confirmation_required: false })).into_response()
        }
        Ok(None) => {
            tracing::info!("signed up; email confirmation pending");
            Json(SignUpBody { session: None, confirmation_required: true }).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-up failed");
            credential_failure(e)
        }
    }
}

/// `POST /api/auth/refresh`: rotate tokens using the refresh cookie.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(refresh_token) = cookie_value(&jar, REFRESH_COOKIE).map(str::to_owned) else {
        return error_body(StatusCode::UNAUTHORIZED, "no refresh token");
    };

    match state.identity.refresh(&refresh_token).await {
        Ok(issued) => {
            let jar = store_session(jar, &issued, state.cookie_secure);
            (jar, Json(SessionBody { session: Some(issued.session) })).into_response()
        }
        Err(e) if e.is_credential_rejection() => {
            tracing::info!(error = %e, "refresh token rejected; clearing session cookies");
            let jar = clear_session(jar, state.cookie_secure);
            (jar, error_body(StatusCode::UNAUTHORIZED, "session expired")).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "refresh failed");
            error_body(StatusCode::BAD_GATEWAY, "identity provider unavailable")
        }
    }
}

/// `POST /api/auth/sign-out`: revoke upstream (best effort), clear cookies.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = cookie_value(&jar, ACCESS_COOKIE) {
        if let Err(e) = state.identity.sign_out(token).await {
            tracing::warn!(error = %e, "provider sign-out failed; clearing cookies anyway");
        }
    }

    let jar = clear_session(jar, state.cookie_secure);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

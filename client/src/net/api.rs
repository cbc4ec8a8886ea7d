//! REST API helpers for the server's `/api/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning no session or an error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of
//! panics so auth failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::Session;
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
const AUTH_API: &str = "/api/auth";

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(action: &str) -> String {
    format!("{AUTH_API}/{action}")
}

/// `{session}` body returned by session, sign-in and refresh.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    pub session: Option<Session>,
}

/// Outcome of a sign-up request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignUpOutcome {
    pub session: Option<Session>,
    pub confirmation_required: bool,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Message for a failed request: the server's `error` field when present,
/// otherwise a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_failure(action: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_message(action, status, &body)
}

#[cfg(feature = "hydrate")]
async fn post_credentials(action: &str, email: &str, password: &str) -> Result<gloo_net::http::Response, String> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(&auth_endpoint(action))
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(action, resp).await);
    }
    Ok(resp)
}

/// Fetch the current session snapshot from `/api/auth/session`.
///
/// # Errors
///
/// Returns an error string if the request itself fails; "no session" is `Ok(None)`.
pub async fn fetch_session() -> Result<Option<Session>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&auth_endpoint("session"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("session lookup", resp).await);
        }
        let body: SessionResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Sign in with email + password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns the provider's message on rejected credentials, or a transport error.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_credentials("sign-in", email, password).await?;
        let body: SessionResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.session.ok_or_else(|| "sign-in returned no session".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns the provider's message on rejection, or a transport error.
pub async fn sign_up(email: &str, password: &str) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_credentials("sign-up", email, password).await?;
        resp.json::<SignUpOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Rotate tokens via `POST /api/auth/refresh`.
///
/// `Ok(None)` means the refresh token was rejected and the session is over.
///
/// # Errors
///
/// Returns an error string on transport failures or provider outages.
pub async fn refresh_session() -> Result<Option<Session>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint("refresh"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(read_failure("refresh", resp).await);
        }
        let body: SessionResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Sign out via `POST /api/auth/sign-out`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint("sign-out"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("sign-out", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

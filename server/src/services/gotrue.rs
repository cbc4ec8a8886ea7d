//! GoTrue (Supabase Auth) client.
//!
//! Thin HTTP wrapper over `/auth/v1`. Response parsing lives in pure
//! functions (`parse_*`) for testability.

use std::time::Duration;

use access::{Session, SessionUser};
use serde::Deserialize;

use super::identity::{IdentityError, IdentityProvider, IssuedSession};
use crate::config::IdentityConfig;

const AUTH_PATH: &str = "/auth/v1";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// Build a client from the identity section of the server config.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: format!("{}{AUTH_PATH}", config.url), anon_key: config.anon_key.clone() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<(u16, String), IdentityError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<(u16, String), IdentityError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    Ok((status, text))
}

fn ensure_success(status: u16, body: &str) -> Result<(), IdentityError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(IdentityError::Rejected { status, message: error_message(body) })
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GoTrueClient {
    async fn resolve_session(&self, access_token: &str) -> Result<Option<Session>, IdentityError> {
        let response = self
            .http
            .get(self.endpoint("/user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        let (status, body) = read_response(response).await?;

        if matches!(status, 401 | 403) {
            return Ok(None);
        }
        ensure_success(status, &body)?;

        let user = parse_user(&body)?;
        Ok(Some(Session { user, expires_at: token_expiry(access_token) }))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<IssuedSession, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, text) = self.post_json("/token?grant_type=password", &body).await?;
        ensure_success(status, &text)?;
        parse_token_response(&text, now_unix())
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<IssuedSession>, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, text) = self.post_json("/signup", &body).await?;
        ensure_success(status, &text)?;
        parse_signup_response(&text, now_unix())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<IssuedSession, IdentityError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let (status, text) = self.post_json("/token?grant_type=refresh_token", &body).await?;
        ensure_success(status, &text)?;
        parse_token_response(&text, now_unix())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let response = self
            .http
            .post(self.endpoint("/logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;
        let (status, body) = read_response(response).await?;
        // An already-revoked token has nothing left to sign out.
        if matches!(status, 401 | 403 | 404) {
            return Ok(());
        }
        ensure_success(status, &body)
    }
}

fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<ApiUser> for SessionUser {
    fn from(user: ApiUser) -> Self {
        Self { id: user.id, email: user.email.filter(|e| !e.is_empty()) }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    #[serde(default)]
    expires_at: Option<i64>,
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ClaimsExp {
    exp: Option<i64>,
}

pub(crate) fn parse_user(body: &str) -> Result<SessionUser, IdentityError> {
    serde_json::from_str::<ApiUser>(body)
        .map(SessionUser::from)
        .map_err(|e| IdentityError::Parse(e.to_string()))
}

pub(crate) fn parse_token_response(body: &str, now: i64) -> Result<IssuedSession, IdentityError> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    let expires_at = token.expires_at.unwrap_or(now + token.expires_in);
    Ok(IssuedSession {
        session: Session { user: token.user.into(), expires_at: Some(expires_at) },
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_in: token.expires_in,
    })
}

/// Auto-confirmed signups return a token response; pending confirmation
/// returns the bare user.
pub(crate) fn parse_signup_response(body: &str, now: i64) -> Result<Option<IssuedSession>, IdentityError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    if value.get("access_token").is_some_and(|t| !t.is_null()) {
        parse_token_response(body, now).map(Some)
    } else {
        Ok(None)
    }
}

/// Read the `exp` claim of a JWT without verifying it.
///
/// The provider already verified the token when it resolved the session;
/// the claim is only used to schedule client-side refresh.
pub(crate) fn token_expiry(token: &str) -> Option<i64> {
    jsonwebtoken::dangerous::insecure_decode::<ClaimsExp>(token).ok()?.claims.exp
}

/// Best-effort human message from a provider error body.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_owned();
    };
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map_or_else(|| body.trim().to_owned(), str::to_owned)
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;

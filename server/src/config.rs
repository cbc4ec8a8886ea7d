//! Server configuration parsed from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so everything here reads
//! plain process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Identity provider endpoint and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Provider base URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
    pub timeouts: IdentityTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub identity: IdentityConfig,
    /// Whether auth cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_URL`: public origin, used to infer `COOKIE_SECURE`
    /// - `COOKIE_SECURE`: explicit override (`1/true/yes/on`, `0/false/no/off`)
    /// - `IDENTITY_REQUEST_TIMEOUT_SECS`: default 10
    /// - `IDENTITY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a required variable is unset or
    /// blank, and [`ConfigError::Invalid`] for an unparsable `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required("SUPABASE_URL")?.trim_end_matches('/').to_owned();
        let anon_key = required("SUPABASE_ANON_KEY")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeouts = IdentityTimeouts {
            request_secs: env_parse_u64("IDENTITY_REQUEST_TIMEOUT_SECS", DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("IDENTITY_CONNECT_TIMEOUT_SECS", DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS),
        };

        let cookie_secure = cookie_secure(env_bool("COOKIE_SECURE"), std::env::var("SITE_URL").ok().as_deref());

        Ok(Self { port, identity: IdentityConfig { url, anon_key, timeouts }, cookie_secure })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Explicit override wins; otherwise secure iff the site is served over https.
pub(crate) fn cookie_secure(explicit: Option<bool>, site_url: Option<&str>) -> bool {
    explicit.unwrap_or_else(|| site_url.is_some_and(|url| url.starts_with("https://")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT session token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Upstream suggestion-service configuration.
    pub ai: AiConfig,
}

/// Configuration for the suggestion gateway's upstream services.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the text-generation service. When absent the suggestion
    /// endpoint answers 500 `SERVICE_UNAVAILABLE` instead of calling out.
    pub gemini_api_key: Option<String>,
    /// Model name passed to the `generateContent` endpoint.
    pub gemini_model: String,
    /// Base URL of the text-generation service.
    pub gemini_base_url: String,
    /// Base URL of the Nominatim-compatible reverse-geocoding service.
    pub geocode_base_url: String,
    /// Timeout applied to every upstream call, in seconds.
    pub upstream_timeout_secs: u64,
}

impl AiConfig {
    /// Timeout as a [`Duration`] for client construction.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                       |
    /// |-------------------------|-----------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                     |
    /// | `PORT`                  | `3000`                                        |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`                       |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                          |
    /// | `GEMINI_API_KEY`        | unset (suggestions disabled)                  |
    /// | `GEMINI_MODEL`          | `gemini-2.5-flash`                            |
    /// | `GEMINI_BASE_URL`       | `https://generativelanguage.googleapis.com`   |
    /// | `GEOCODE_BASE_URL`      | `https://nominatim.openstreetmap.org`         |
    /// | `UPSTREAM_TIMEOUT_SECS` | `20`                                          |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let ai = AiConfig {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            geocode_base_url: std::env::var("GEOCODE_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".into()),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".into())
                .parse()
                .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            ai,
        }
    }
}

//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use chrono::Duration;

use super::constants::{
    DEFAULT_AUTH_PASSWORD, DEFAULT_AUTH_ROLE, DEFAULT_AUTH_USERNAME, DEFAULT_CORS_ORIGINS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SWEEP_INTERVAL_SECONDS,
    TOKEN_LIFETIME_SECONDS,
};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub token_lifetime_seconds: i64,
    /// Interval of the background expiry sweep, `0` = lazy expiry only
    pub sweep_interval_seconds: u64,
    pub cors_origins: Vec<String>,
    pub auth_username: String,
    auth_password: String,
    pub auth_role: Role,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .field("sweep_interval_seconds", &self.sweep_interval_seconds)
            .field("cors_origins", &self.cors_origins)
            .field("auth_username", &self.auth_username)
            .field("auth_password", &"[REDACTED]")
            .field("auth_role", &self.auth_role)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            token_lifetime_seconds: TOKEN_LIFETIME_SECONDS,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            auth_username: DEFAULT_AUTH_USERNAME.to_string(),
            auth_password: DEFAULT_AUTH_PASSWORD.to_string(),
            auth_role: Role::Admin,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let auth_password = env::var("AUTH_PASSWORD").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("AUTH_PASSWORD not set, using insecure default for development");
            }
            DEFAULT_AUTH_PASSWORD.to_string()
        });

        let token_lifetime_seconds = parse_var("TOKEN_LIFETIME_SECONDS", TOKEN_LIFETIME_SECONDS)?;
        if token_lifetime_seconds <= 0 {
            return Err(AppError::validation(
                "TOKEN_LIFETIME_SECONDS must be a positive number of seconds",
            ));
        }

        let auth_role = env::var("AUTH_ROLE").unwrap_or_else(|_| DEFAULT_AUTH_ROLE.to_string());

        let cors_origins = split_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );
        validate_origins(&cors_origins)?;

        Ok(Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            token_lifetime_seconds,
            sweep_interval_seconds: parse_var(
                "SESSION_SWEEP_INTERVAL_SECONDS",
                DEFAULT_SWEEP_INTERVAL_SECONDS,
            )?,
            cors_origins,
            auth_username: env::var("AUTH_USERNAME")
                .unwrap_or_else(|_| DEFAULT_AUTH_USERNAME.to_string()),
            auth_password,
            auth_role: Role::from_str(&auth_role)?,
        })
    }

    /// Replace the single configured credential tuple.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        self.auth_username = username.into();
        self.auth_password = password.into();
        self.auth_role = role;
        self
    }

    /// Password of the configured principal.
    pub fn auth_password(&self) -> &str {
        &self.auth_password
    }

    /// Token lifetime as a duration.
    pub fn token_lifetime(&self) -> Duration {
        Duration::seconds(self.token_lifetime_seconds)
    }

    /// Sweep interval, `None` when the sweeper is disabled.
    pub fn sweep_interval(&self) -> Option<std::time::Duration> {
        (self.sweep_interval_seconds > 0)
            .then(|| std::time::Duration::from_secs(self.sweep_interval_seconds))
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::validation(format!("{} has an invalid value: {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Credentialed CORS needs explicit origins; a wildcard is refused up front.
fn validate_origins(origins: &[String]) -> AppResult<()> {
    if origins.iter().any(|origin| origin == "*") {
        return Err(AppError::validation(
            "CORS_ALLOWED_ORIGINS must list explicit origins, `*` is not allowed",
        ));
    }
    Ok(())
}

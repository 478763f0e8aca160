//! Session verification - the single authorization decision point.

use std::sync::Arc;

use chrono::Duration;

use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{Role, Session};
use crate::errors::{AppError, AppResult};
use crate::infra::{Lookup, TokenRegistry};

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(header: Option<&str>) -> AppResult<&str> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(AppError::MalformedCredential)?;

    ensure_token_shape(token)?;
    Ok(token)
}

fn ensure_token_shape(token: &str) -> AppResult<()> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(AppError::MalformedCredential);
    }
    Ok(())
}

/// Checks presented tokens against the registry.
///
/// Order of checks: shape, existence, expiry (evicting), role. An expired
/// token therefore reports [`AppError::TokenExpired`] even if its role would
/// also be rejected, and a role mismatch leaves the session in place.
#[derive(Clone)]
pub struct SessionVerifier {
    registry: Arc<TokenRegistry>,
    lifetime: Duration,
}

impl SessionVerifier {
    pub fn new(registry: Arc<TokenRegistry>, lifetime: Duration) -> Self {
        Self { registry, lifetime }
    }

    /// Verify a raw `Authorization` header value.
    pub fn verify(&self, authorization: Option<&str>, required: Option<Role>) -> AppResult<Session> {
        let token = parse_bearer(authorization)?;
        self.verify_token(token, required)
    }

    /// Verify a bare token.
    pub fn verify_token(&self, token: &str, required: Option<Role>) -> AppResult<Session> {
        ensure_token_shape(token)?;

        let session = match self.registry.check(token, self.lifetime) {
            Lookup::Active(session) => session,
            Lookup::Expired => return Err(AppError::TokenExpired),
            Lookup::Missing => return Err(AppError::InvalidToken),
        };

        if !session.satisfies(required) {
            return Err(AppError::InsufficientPrivilege);
        }

        Ok(session)
    }
}

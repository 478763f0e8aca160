//! Authentication service - token issuance, authorization and revocation.
//!
//! These are the only entry points the HTTP gateway calls. Every failure is
//! returned as an [`AppError`]; nothing here logs or retries.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::credential_store::CredentialStore;
use super::verifier::SessionVerifier;
use crate::config::TOKEN_TYPE_BEARER;
use crate::domain::{Role, Session};
use crate::errors::{AppError, AppResult};
use crate::infra::TokenRegistry;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub role: Role,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Opaque bearer token
    #[schema(example = "3f2c1b7e-9a4d-4e0b-8c61-2f5d9e7a1b34")]
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Role attached to the session
    pub role: Role,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            role: issued.role,
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and open a new session.
    async fn issue(&self, username: &str, password: &str) -> AppResult<IssuedToken>;

    /// Verify an `Authorization` header value, optionally demanding a role.
    fn authorize(&self, authorization: Option<&str>, required: Option<Role>) -> AppResult<Session>;

    /// Drop a session. Unknown tokens are ignored; returns whether one was removed.
    fn revoke(&self, token: &str) -> bool;

    /// Number of sessions currently held.
    fn active_sessions(&self) -> usize;
}

/// Concrete implementation of AuthService over the in-memory registry.
pub struct Authenticator {
    credentials: Arc<dyn CredentialStore>,
    registry: Arc<TokenRegistry>,
    verifier: SessionVerifier,
}

impl Authenticator {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        registry: Arc<TokenRegistry>,
        verifier: SessionVerifier,
    ) -> Self {
        Self {
            credentials,
            registry,
            verifier,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn issue(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        let role = self
            .credentials
            .verify(username, password)
            .await
            .ok_or(AppError::AuthenticationFailure)?;

        let token = self.registry.create(username, role);
        Ok(IssuedToken { token, role })
    }

    fn authorize(&self, authorization: Option<&str>, required: Option<Role>) -> AppResult<Session> {
        self.verifier.verify(authorization, required)
    }

    fn revoke(&self, token: &str) -> bool {
        self.registry.remove(token)
    }

    fn active_sessions(&self) -> usize {
        self.registry.len()
    }
}

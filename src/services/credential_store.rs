//! Credential store abstraction consulted at login.

use async_trait::async_trait;

use crate::config::Config;
use crate::domain::Role;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Identity backend that resolves a username/password pair to a role.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Return the principal's role if the pair is valid.
    async fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// A single fixed username/password/role tuple.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
    role: Role,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.auth_username.clone(),
            config.auth_password(),
            config.auth_role,
        )
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

#[async_trait]
impl CredentialStore for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> Option<Role> {
        (username == self.username && password == self.password).then_some(self.role)
    }
}

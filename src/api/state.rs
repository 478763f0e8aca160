//! Application state - Dependency injection container.
//!
//! Owns the token registry handle and the services built on it. Handlers
//! reach the authorization core only through [`AppState::auth_service`].

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Clock, SystemClock, TokenRegistry};
use crate::services::{
    AuthService, Authenticator, CredentialStore, SessionVerifier, StaticCredentials,
};

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Session store, shared with the background sweeper
    pub registry: Arc<TokenRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the full service graph from configuration, using the wall clock
    /// and the configured single credential.
    pub fn from_config(config: Config) -> Self {
        let credentials = Arc::new(StaticCredentials::from_config(&config));
        Self::with_parts(config, credentials, Arc::new(SystemClock))
    }

    /// Build the service graph with an injected credential store and clock.
    pub fn with_parts(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let registry = Arc::new(TokenRegistry::new(clock));
        let verifier = SessionVerifier::new(registry.clone(), config.token_lifetime());
        let auth_service = Arc::new(Authenticator::new(credentials, registry.clone(), verifier));

        Self {
            auth_service,
            registry,
            config: Arc::new(config),
        }
    }
}

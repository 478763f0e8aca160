//! Application services layer - The authorization core.
//!
//! Credential checking, token issuance, verification and revocation. The
//! gateway depends on the [`AuthService`] trait only.

mod auth_service;
mod credential_store;
pub mod sweeper;
mod verifier;

pub use auth_service::{AuthService, Authenticator, IssuedToken, TokenResponse};
pub use credential_store::{CredentialStore, StaticCredentials};
pub use sweeper::spawn_sweeper;
pub use verifier::{parse_bearer, SessionVerifier};

#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::MockCredentialStore;

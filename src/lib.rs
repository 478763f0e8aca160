//! Session Gate - short-lived bearer tokens with role-gated access.
//!
//! A single-process, in-memory authorization core behind a thin axum
//! gateway. Tokens are opaque, live for a fixed lifetime and are expired
//! lazily when presented.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Roles and session records
//! - **infra**: Token registry and clock
//! - **services**: Issuance, verification and revocation
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Role, Session};
pub use errors::{AppError, AppResult};
pub use infra::TokenRegistry;

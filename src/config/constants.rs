//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Sessions & Tokens
// =============================================================================

/// Lifetime of an issued bearer token in seconds (1 hour)
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Default sweep interval in seconds; 0 disables the background sweeper
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 0;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type reported in login responses
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Value of the `WWW-Authenticate` header sent with 401 responses
pub const WWW_AUTHENTICATE_BEARER: &str = "Bearer";

// =============================================================================
// Roles
// =============================================================================

/// Regular authenticated principal
pub const ROLE_USER: &str = "user";

/// Administrator role with access to admin-only routes
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Credential Store
// =============================================================================

/// Default username of the single configured principal
pub const DEFAULT_AUTH_USERNAME: &str = "user";

/// Default password of the single configured principal (development only)
pub const DEFAULT_AUTH_PASSWORD: &str = "password";

/// Default role granted to the configured principal
pub const DEFAULT_AUTH_ROLE: &str = ROLE_ADMIN;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default comma-separated list of origins allowed by CORS
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

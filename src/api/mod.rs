//! API layer - The HTTP gateway
//!
//! Extracts bearer tokens, calls the authorization core and maps its
//! outcomes onto HTTP responses:
//! - Request handlers
//! - Authentication middleware
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

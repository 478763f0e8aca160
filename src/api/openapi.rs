//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, data_handler, health_handler};
use crate::domain::Role;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the session gate
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Session Gate",
        version = "0.1.0",
        description = "Short-lived bearer tokens with role-gated endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        auth_handler::logout,
        data_handler::secret_data,
        data_handler::admin_data,
        health_handler::health,
    ),
    components(
        schemas(
            Role,
            TokenResponse,
            MessageResponse,
            auth_handler::LoginForm,
            health_handler::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and logout"),
        (name = "Data", description = "Protected resources"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for opaque Bearer tokens
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque token obtained from /api/login"))
                        .build(),
                ),
            );
        }
    }
}

//! Protected resources.
//!
//! Authorization is applied by the route layers in `routes.rs`; these
//! handlers only read the injected session.

use axum::{extract::Extension, response::Json, routing::get, Router};

use crate::api::middleware::CurrentSession;
use crate::api::AppState;
use crate::types::MessageResponse;

/// Routes open to any valid session
pub fn data_routes() -> Router<AppState> {
    Router::new().route("/secret-data", get(secret_data))
}

/// Routes restricted to admins
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin-data", get(admin_data))
}

/// Data for any authenticated principal
#[utoipa::path(
    get,
    path = "/api/secret-data",
    tag = "Data",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Secret message", body = MessageResponse),
        (status = 401, description = "Missing, unknown or expired token")
    )
)]
pub async fn secret_data(Extension(session): Extension<CurrentSession>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Hello, {}! Secret message: 42.",
        session.username()
    )))
}

/// Data for admins only
#[utoipa::path(
    get,
    path = "/api/admin-data",
    tag = "Data",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin-only message", body = MessageResponse),
        (status = 401, description = "Missing, unknown or expired token"),
        (status = 403, description = "Insufficient privileges")
    )
)]
pub async fn admin_data(Extension(session): Extension<CurrentSession>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Hello, admin {}! This is admin-only data.",
        session.username()
    )))
}

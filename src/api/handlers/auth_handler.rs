//! Login and logout handlers.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedForm;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{parse_bearer, TokenResponse};
use crate::types::MessageResponse;

/// Login form (`application/x-www-form-urlencoded`)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    /// Account name
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "user")]
    pub username: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let issued = match state.auth_service.issue(&form.username, &form.password).await {
        Ok(issued) => issued,
        Err(e) => {
            tracing::warn!(username = %form.username, "Login failed");
            return Err(e);
        }
    };

    tracing::info!(username = %form.username, role = %issued.role, "Session issued");
    Ok(Json(TokenResponse::from(issued)))
}

/// Revoke the presented bearer token
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Invalid authentication scheme")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<MessageResponse>> {
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let token = parse_bearer(header)?;

    if state.auth_service.revoke(token) {
        tracing::info!("Session revoked");
    }

    Ok(Json(MessageResponse::new("Logged out")))
}

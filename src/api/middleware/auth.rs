//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::domain::{Role, Session};
use crate::errors::AppError;

/// Authenticated session injected into request extensions.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Any valid session may pass.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize_request(&state, request, next, None).await
}

/// Only sessions carrying the admin role may pass.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize_request(&state, request, next, Some(Role::Admin)).await
}

async fn authorize_request(
    state: &AppState,
    mut request: Request,
    next: Next,
    required: Option<Role>,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let session = match state.auth_service.authorize(header, required) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(
                method = %request.method(),
                uri = %request.uri(),
                reason = e.code(),
                "Request rejected"
            );
            return Err(e);
        }
    };

    let current = CurrentSession(session);
    tracing::trace!(
        username = current.username(),
        role = %current.role(),
        uri = %request.uri(),
        "Request authorized"
    );
    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}

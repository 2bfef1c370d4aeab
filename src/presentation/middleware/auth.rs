//! Authentication Middleware
//!
//! Bearer-token gate for protected routes. On success the verified claims
//! are inserted into the request extensions as [`AuthUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::application::services::extract_bearer;
use crate::domain::Identity;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Message returned for every gate rejection.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Why the gate rejected a request. Both variants produce the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,
}

impl From<GateError> for AppError {
    fn from(e: GateError) -> Self {
        tracing::debug!(reason = %e, "Request rejected by auth gate");
        AppError::Unauthorized(UNAUTHORIZED_MESSAGE.into())
    }
}

/// Authenticated user extension
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| GateError::MissingToken.into())
    }
}

/// Resolve the acting identity from a raw `Authorization` header value.
pub fn authorize(state: &AppState, header: Option<&str>) -> Result<AuthUser, GateError> {
    let token = extract_bearer(header).ok_or(GateError::MissingToken)?;
    let claims = state.tokens.verify(token).ok_or(GateError::InvalidToken)?;
    Ok(AuthUser(claims.identity()))
}

/// Authentication middleware that validates bearer tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let user = authorize(&state, header)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

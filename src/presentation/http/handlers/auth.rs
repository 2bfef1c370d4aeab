//! Authentication Handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::application::dto::request::LoginRequest;
use crate::application::dto::response::{ApiResponse, LoginResponse};
use crate::application::services::{AuthError, AuthService, AuthServiceImpl};
use crate::infrastructure::metrics::record_login;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    body.validate().map_err(validation_error)?;

    let auth_service = AuthServiceImpl::new(state.users.clone(), state.tokens.clone());

    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let outcome = match auth_service.login(&email, &password).await {
        Ok(outcome) => {
            record_login("success");
            outcome
        }
        Err(e) => {
            let label = match e {
                AuthError::UnknownEmail | AuthError::WrongPassword => "rejected",
                _ => "error",
            };
            record_login(label);
            return Err(e.into());
        }
    };

    Ok(Json(ApiResponse::ok(LoginResponse::from(outcome))))
}

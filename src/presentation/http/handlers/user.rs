//! User Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::PageQuery;
use crate::application::dto::response::{
    ApiResponse, UserDetailResponse, UserListResponse, UserProfileResponse, UserResponse,
};
use crate::application::services::{UserService, UserServiceImpl};
use crate::presentation::http::extractors::{parse_id, AppQuery};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List members, newest first
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<UserListResponse>>, AppError> {
    let user_service = UserServiceImpl::new(state.users.clone());

    let users = user_service.list_users(query.page()).await?;

    Ok(Json(ApiResponse::ok(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    })))
}

/// Get a member profile with activity counts
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, AppError> {
    let user_id = parse_id(&user_id, "User not found")?;
    let user_service = UserServiceImpl::new(state.users.clone());

    let profile = user_service.get_user(user_id).await?;

    Ok(Json(ApiResponse::ok(UserDetailResponse {
        user: UserProfileResponse::from(profile),
    })))
}

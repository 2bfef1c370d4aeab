//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::CreateCommentRequest;
use crate::application::dto::response::{ApiResponse, CommentResponse, CreateCommentResponse};
use crate::application::services::{CommentService, CommentServiceImpl};
use crate::presentation::http::extractors::{parse_id, AppJson};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Comment on a post as the acting user
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    AppJson(body): AppJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateCommentResponse>>), AppError> {
    let post_id = parse_id(&post_id, "Post not found")?;
    let comment_service = CommentServiceImpl::new(state.posts.clone(), state.comments.clone());

    let content = body.content.unwrap_or_default();
    let comment = comment_service
        .create_comment(auth.identity(), post_id, &content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreateCommentResponse {
            comment: CommentResponse::from(comment),
        })),
    ))
}

//! Post Handlers
//!
//! Feed, post creation, post detail and likes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreatePostRequest, ListPostsQuery, OwnerFilter};
use crate::application::dto::response::{
    ApiResponse, CreatePostResponse, LikeResponse, PostDetailResponse, PostListResponse,
    PostResponse, PostSummaryResponse,
};
use crate::application::services::{PostService, PostServiceImpl};
use crate::infrastructure::metrics::record_like;
use crate::presentation::http::extractors::{parse_id, AppJson, AppQuery};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

const POST_NOT_FOUND: &str = "Post not found";

/// Create a post as the acting user
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatePostResponse>>), AppError> {
    let post_service = PostServiceImpl::new(state.posts.clone(), state.comments.clone());

    let content = body.content.unwrap_or_default();
    let post = post_service.create_post(auth.identity(), &content).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatePostResponse {
            post: PostResponse::from(post),
        })),
    ))
}

/// List posts newest first, optionally filtered by `userId`
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(query): AppQuery<ListPostsQuery>,
) -> Result<Json<ApiResponse<PostListResponse>>, AppError> {
    let owner = match query.owner_filter() {
        OwnerFilter::Everyone => None,
        OwnerFilter::User(id) => Some(id),
        // No post can belong to an id that is not a UUID
        OwnerFilter::Nobody => {
            return Ok(Json(ApiResponse::ok(PostListResponse { posts: vec![] })));
        }
    };

    let post_service = PostServiceImpl::new(state.posts.clone(), state.comments.clone());
    let posts = post_service.list_posts(owner, query.page()).await?;

    Ok(Json(ApiResponse::ok(PostListResponse {
        posts: posts.into_iter().map(PostSummaryResponse::from).collect(),
    })))
}

/// Get a post with all of its comments
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<ApiResponse<PostDetailResponse>>, AppError> {
    let post_id = parse_id(&post_id, POST_NOT_FOUND)?;
    let post_service = PostServiceImpl::new(state.posts.clone(), state.comments.clone());

    let detail = post_service.get_post(post_id).await?;

    Ok(Json(ApiResponse::ok(PostDetailResponse::from(detail))))
}

/// Add one like to a post
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<ApiResponse<LikeResponse>>, AppError> {
    let post_id = parse_id(&post_id, POST_NOT_FOUND)?;
    let post_service = PostServiceImpl::new(state.posts.clone(), state.comments.clone());

    let likes_count = post_service.like_post(post_id, auth.identity()).await?;
    record_like();

    Ok(Json(ApiResponse::ok(LikeResponse { likes_count })))
}

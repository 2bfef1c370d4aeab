//! Response DTOs
//!
//! Data structures for API response bodies. Every body is wrapped in
//! [`ApiResponse`], which adds `"success": true`.

use serde::Serialize;

use crate::application::services::{LoginOutcome, PostDetail};
use crate::domain::{AuthoredComment, AuthoredPost, Post, PostSummary, User, UserProfile};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Identity returned at login
#[derive(Debug, Serialize)]
pub struct SessionUserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUserResponse,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        let user = outcome.user;
        Self {
            token: outcome.token,
            user: SessionUserResponse {
                id: user.id.to_string(),
                email: user.email,
                full_name: user.full_name,
                role: user.role.as_str().to_string(),
            },
        }
    }
}

/// Public user projection
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            full_name: user.full_name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            role: user.role.as_str().to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Members directory
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Public user projection plus activity counters
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts_count: i64,
    pub comments_count: i64,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user: UserResponse::from(profile.user),
            posts_count: profile.posts_count,
            comments_count: profile.comments_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: UserProfileResponse,
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub likes_count: i64,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            content: post.content,
            likes_count: post.likes_count,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post: PostResponse,
}

/// Feed entry
#[derive(Debug, Serialize)]
pub struct PostSummaryResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author_name: String,
    pub comments_count: i64,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        let author_name = summary.author_name_or_unknown().to_string();
        Self {
            post: PostResponse::from(summary.post),
            author_name,
            comments_count: summary.comments_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummaryResponse>,
}

/// Post with its owner's name
#[derive(Debug, Serialize)]
pub struct AuthoredPostResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author_name: String,
}

impl From<AuthoredPost> for AuthoredPostResponse {
    fn from(authored: AuthoredPost) -> Self {
        let author_name = authored.author_name_or_unknown().to_string();
        Self {
            post: PostResponse::from(authored.post),
            author_name,
        }
    }
}

/// Comment with its author's name
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: String,
    pub author_name: String,
}

impl From<AuthoredComment> for CommentResponse {
    fn from(authored: AuthoredComment) -> Self {
        let author_name = authored.author_name_or_unknown().to_string();
        let comment = authored.comment;
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            content: comment.content,
            created_at: comment.created_at.to_rfc3339(),
            author_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub comment: CommentResponse,
}

/// Post detail page
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: AuthoredPostResponse,
    pub comments: Vec<CommentResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: AuthoredPostResponse::from(detail.post),
            comments: detail.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes_count: i64,
}

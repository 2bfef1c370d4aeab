//! Post Service
//!
//! Feed listing, post creation, post detail and likes.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    normalize_content, AuthoredComment, AuthoredPost, CommentRepository, ContentError, Identity,
    Page, Post, PostRepository, PostSummary, MAX_POST_LENGTH,
};
use crate::shared::error::AppError;

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post owned by the acting identity
    async fn create_post(&self, author: &Identity, content: &str) -> Result<Post, PostError>;

    /// List posts newest first, optionally for a single owner
    async fn list_posts(
        &self,
        owner: Option<Uuid>,
        page: Page,
    ) -> Result<Vec<PostSummary>, PostError>;

    /// Get a post and all of its comments
    async fn get_post(&self, post_id: Uuid) -> Result<PostDetail, PostError>;

    /// Add one like and return the new total
    async fn like_post(&self, post_id: Uuid, actor: &Identity) -> Result<i64, PostError>;
}

/// A post with its comments, newest comment first.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: AuthoredPost,
    pub comments: Vec<AuthoredComment>,
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("Invalid content: {0}")]
    InvalidContent(ContentError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PostError> for AppError {
    fn from(e: PostError) -> Self {
        match e {
            PostError::NotFound => AppError::NotFound("Post not found".into()),
            PostError::InvalidContent(ContentError::Empty) => {
                AppError::InvalidInput("Content is required".into())
            }
            PostError::InvalidContent(ContentError::TooLong { .. }) => {
                AppError::InvalidInput("Content must be less than 10,000 characters".into())
            }
            PostError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// PostService implementation
pub struct PostServiceImpl<P, C>
where
    P: PostRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> PostServiceImpl<P, C>
where
    P: PostRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }
}

fn internal(e: AppError) -> PostError {
    PostError::Internal(e.to_string())
}

#[async_trait]
impl<P, C> PostService for PostServiceImpl<P, C>
where
    P: PostRepository + ?Sized + 'static,
    C: CommentRepository + ?Sized + 'static,
{
    async fn create_post(&self, author: &Identity, content: &str) -> Result<Post, PostError> {
        let content =
            normalize_content(content, MAX_POST_LENGTH).map_err(PostError::InvalidContent)?;

        let post = Post::new(author.user_id, content);
        let created = self.post_repo.create(&post).await.map_err(internal)?;

        tracing::info!(post_id = %created.id, user_id = %author.user_id, "Post created");
        Ok(created)
    }

    async fn list_posts(
        &self,
        owner: Option<Uuid>,
        page: Page,
    ) -> Result<Vec<PostSummary>, PostError> {
        self.post_repo
            .list_summaries(owner, page)
            .await
            .map_err(internal)
    }

    async fn get_post(&self, post_id: Uuid) -> Result<PostDetail, PostError> {
        let post = self
            .post_repo
            .find_authored(post_id)
            .await
            .map_err(internal)?
            .ok_or(PostError::NotFound)?;

        let comments = self
            .comment_repo
            .list_for_post(post_id)
            .await
            .map_err(internal)?;

        Ok(PostDetail { post, comments })
    }

    async fn like_post(&self, post_id: Uuid, actor: &Identity) -> Result<i64, PostError> {
        let likes = self
            .post_repo
            .increment_likes(post_id)
            .await
            .map_err(internal)?
            .ok_or(PostError::NotFound)?;

        tracing::debug!(post_id = %post_id, user_id = %actor.user_id, likes, "Post liked");
        Ok(likes)
    }
}

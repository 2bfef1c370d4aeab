//! Comment Service

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    normalize_content, AuthoredComment, Comment, CommentRepository, ContentError, Identity,
    PostRepository, MAX_COMMENT_LENGTH,
};
use crate::shared::error::AppError;

/// Comment service trait
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comment on a post as the acting identity
    async fn create_comment(
        &self,
        author: &Identity,
        post_id: Uuid,
        content: &str,
    ) -> Result<AuthoredComment, CommentError>;
}

/// Comment service errors
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Invalid content: {0}")]
    InvalidContent(ContentError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CommentError> for AppError {
    fn from(e: CommentError) -> Self {
        match e {
            CommentError::PostNotFound => AppError::NotFound("Post not found".into()),
            CommentError::InvalidContent(ContentError::Empty) => {
                AppError::InvalidInput("Content is required".into())
            }
            CommentError::InvalidContent(ContentError::TooLong { .. }) => {
                AppError::InvalidInput("Comment must be less than 2,000 characters".into())
            }
            CommentError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CommentService implementation
pub struct CommentServiceImpl<P, C>
where
    P: PostRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> CommentServiceImpl<P, C>
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

#[async_trait]
impl<P, C> CommentService for CommentServiceImpl<P, C>
where
    P: PostRepository + ?Sized + 'static,
    C: CommentRepository + ?Sized + 'static,
{
    async fn create_comment(
        &self,
        author: &Identity,
        post_id: Uuid,
        content: &str,
    ) -> Result<AuthoredComment, CommentError> {
        // Content is checked before the post lookup, so a bad body on a
        // missing post reports 400.
        let content = normalize_content(content, MAX_COMMENT_LENGTH)
            .map_err(CommentError::InvalidContent)?;

        let exists = self
            .post_repo
            .exists(post_id)
            .await
            .map_err(|e| CommentError::Internal(e.to_string()))?;
        if !exists {
            return Err(CommentError::PostNotFound);
        }

        let comment = Comment::new(post_id, author.user_id, content);
        let created = self
            .comment_repo
            .create(&comment)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => CommentError::PostNotFound,
                other => CommentError::Internal(other.to_string()),
            })?;

        tracing::info!(
            comment_id = %created.comment.id,
            post_id = %post_id,
            user_id = %author.user_id,
            "Comment created"
        );
        Ok(created)
    }
}

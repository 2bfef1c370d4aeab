//! Comment entity and repository trait.
//!
//! Maps to the `comments` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::post::UNKNOWN_AUTHOR;
use crate::shared::error::AppError;

/// A comment on a post.
///
/// Maps to the `comments` table:
/// - id: UUID PRIMARY KEY
/// - post_id: UUID NOT NULL REFERENCES posts(id)
/// - user_id: UUID NOT NULL REFERENCES users(id)
/// - content: TEXT NOT NULL (1-2,000 characters, trimmed)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,

    /// Author of the comment
    pub user_id: Uuid,

    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}

/// A comment joined with its author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredComment {
    pub comment: Comment,
    pub author_name: Option<String>,
}

impl AuthoredComment {
    pub fn author_name_or_unknown(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment and return it joined with the author's name.
    async fn create(&self, comment: &Comment) -> Result<AuthoredComment, AppError>;

    /// All comments of a post, newest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<AuthoredComment>, AppError>;
}

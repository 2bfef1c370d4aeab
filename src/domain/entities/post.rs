//! Post entity and repository trait.
//!
//! Maps to the `posts` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::Page;
use crate::shared::error::AppError;

/// Name shown when an author row cannot be joined.
pub const UNKNOWN_AUTHOR: &str = "Unknown User";

/// A text post.
///
/// Maps to the `posts` table:
/// - id: UUID PRIMARY KEY
/// - user_id: UUID NOT NULL REFERENCES users(id)
/// - content: TEXT NOT NULL (1-10,000 characters, trimmed)
/// - likes_count: BIGINT NOT NULL DEFAULT 0
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: Uuid,

    /// Owner of the post
    pub user_id: Uuid,

    pub content: String,

    /// Never negative, starts at 0
    pub likes_count: i64,

    pub created_at: DateTime<Utc>,
}

impl Post {
    /// A fresh post owned by `user_id` with no likes.
    pub fn new(user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            likes_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// A post joined with its owner's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredPost {
    pub post: Post,
    pub author_name: Option<String>,
}

impl AuthoredPost {
    pub fn author_name_or_unknown(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// A post as shown in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub post: Post,
    pub author_name: Option<String>,
    pub comments_count: i64,
}

impl PostSummary {
    pub fn author_name_or_unknown(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// Repository trait for Post data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return the stored row.
    async fn create(&self, post: &Post) -> Result<Post, AppError>;

    /// Whether a post with this id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Find a post with its owner's name.
    async fn find_authored(&self, id: Uuid) -> Result<Option<AuthoredPost>, AppError>;

    /// Feed listing, newest first, optionally restricted to one owner.
    ///
    /// Comment counts are aggregated in the same round trip.
    async fn list_summaries(
        &self,
        owner: Option<Uuid>,
        page: Page,
    ) -> Result<Vec<PostSummary>, AppError>;

    /// Atomically add one like. Returns the new counter, or `None` when the
    /// post does not exist.
    async fn increment_likes(&self, id: Uuid) -> Result<Option<i64>, AppError>;
}

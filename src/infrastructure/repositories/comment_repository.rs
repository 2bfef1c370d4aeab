//! Comment Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{AuthoredComment, Comment, CommentRepository};
use crate::shared::error::AppError;

/// Foreign key from `comments.post_id` to `posts.id`.
const COMMENT_POST_FOREIGN_KEY: &str = "comments_post_id_fkey";

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Comment row joined with the author's display name.
#[derive(Debug, sqlx::FromRow)]
struct AuthoredCommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    author_name: Option<String>,
}

impl AuthoredCommentRow {
    fn into_authored(self) -> AuthoredComment {
        AuthoredComment {
            comment: Comment {
                id: self.id,
                post_id: self.post_id,
                user_id: self.user_id,
                content: self.content,
                created_at: self.created_at,
            },
            author_name: self.author_name,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<AuthoredComment, AppError> {
        let row = sqlx::query_as::<_, AuthoredCommentRow>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, post_id, user_id, content, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, post_id, user_id, content, created_at
            )
            SELECT i.id, i.post_id, i.user_id, i.content, i.created_at,
                   u.full_name AS author_name
            FROM inserted i
            LEFT JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The post was deleted between the existence check and the insert
            sqlx::Error::Database(db_err)
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some(COMMENT_POST_FOREIGN_KEY) =>
            {
                AppError::NotFound("Post not found".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_authored())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<AuthoredComment>, AppError> {
        let rows = sqlx::query_as::<_, AuthoredCommentRow>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.content, c.created_at,
                   u.full_name AS author_name
            FROM comments c
            LEFT JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC, c.id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AuthoredCommentRow::into_authored).collect())
    }
}

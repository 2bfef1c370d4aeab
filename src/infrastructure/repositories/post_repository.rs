//! Post Repository Implementation
//!
//! PostgreSQL implementation of post storage, the feed query and likes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{AuthoredPost, Page, Post, PostRepository, PostSummary};
use crate::shared::error::AppError;

/// PostgreSQL post repository implementation.
///
/// The feed is served by a single query that joins the author and
/// aggregates comment counts, so listing N posts costs one round trip.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for post queries.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    content: String,
    likes_count: i64,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            user_id: self.user_id,
            content: self.content,
            likes_count: self.likes_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AuthoredPostRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct PostSummaryRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: Option<String>,
    comments_count: i64,
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, user_id, content, likes_count, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, content, likes_count, created_at
            "#,
        )
        .bind(post.id)
        .bind(post.user_id)
        .bind(&post.content)
        .bind(post.likes_count)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_authored(&self, id: Uuid) -> Result<Option<AuthoredPost>, AppError> {
        let row = sqlx::query_as::<_, AuthoredPostRow>(
            r#"
            SELECT p.id, p.user_id, p.content, p.likes_count, p.created_at,
                   u.full_name AS author_name
            FROM posts p
            LEFT JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AuthoredPost {
            post: r.post.into_post(),
            author_name: r.author_name,
        }))
    }

    async fn list_summaries(
        &self,
        owner: Option<Uuid>,
        page: Page,
    ) -> Result<Vec<PostSummary>, AppError> {
        let rows = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT p.id, p.user_id, p.content, p.likes_count, p.created_at,
                   u.full_name AS author_name,
                   COALESCE(c.comments_count, 0) AS comments_count
            FROM posts p
            LEFT JOIN users u ON u.id = p.user_id
            LEFT JOIN (
                SELECT post_id, COUNT(*) AS comments_count
                FROM comments
                GROUP BY post_id
            ) c ON c.post_id = p.id
            WHERE ($1::uuid IS NULL OR p.user_id = $1)
            ORDER BY p.created_at DESC, p.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PostSummary {
                post: r.post.into_post(),
                author_name: r.author_name,
                comments_count: r.comments_count,
            })
            .collect())
    }

    /// Single-statement increment, so concurrent likes are never lost.
    async fn increment_likes(&self, id: Uuid) -> Result<Option<i64>, AppError> {
        let likes = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE posts
            SET likes_count = likes_count + 1
            WHERE id = $1
            RETURNING likes_count
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(likes)
    }
}

//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Maps between the database schema and domain User entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Page, Role, User, UserProfile, UserRepository};
use crate::shared::error::AppError;

/// Database row representation matching the users table.
///
/// The hash lives in the `password` column and is aliased on select.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    avatar_url: Option<String>,
    bio: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> Result<User, AppError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|e| AppError::Internal(format!("user {}: {}", self.id, e)))?;

        Ok(User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            bio: self.bio,
            role,
            created_at: self.created_at,
        })
    }
}

/// User row plus aggregated activity counters.
#[derive(Debug, sqlx::FromRow)]
struct UserProfileRow {
    #[sqlx(flatten)]
    user: UserRow,
    posts_count: i64,
    comments_count: i64,
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Exact match on the stored address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password AS password_hash, full_name, avatar_url,
                   bio, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password AS password_hash, full_name, avatar_url,
                   bio, role, created_at
            FROM users
            ORDER BY created_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT u.id, u.email, u.password AS password_hash, u.full_name, u.avatar_url,
                   u.bio, u.role, u.created_at,
                   (SELECT COUNT(*) FROM posts p WHERE p.user_id = u.id) AS posts_count,
                   (SELECT COUNT(*) FROM comments c WHERE c.user_id = u.id) AS comments_count
            FROM users u
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            Ok(UserProfile {
                user: r.user.into_user()?,
                posts_count: r.posts_count,
                comments_count: r.comments_count,
            })
        })
        .transpose()
    }
}

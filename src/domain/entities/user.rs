//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::{Page, Role};
use crate::shared::error::AppError;

/// Represents a registered member.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - email: VARCHAR(255) NOT NULL UNIQUE (case-insensitive index)
/// - password: VARCHAR(255) NOT NULL (argon2 PHC string)
/// - full_name: VARCHAR(255) NOT NULL
/// - avatar_url: TEXT NULL
/// - bio: TEXT NULL
/// - role: VARCHAR(20) NOT NULL ('member' | 'moderator' | 'admin')
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,

    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    pub full_name: String,

    pub avatar_url: Option<String>,

    pub bio: Option<String>,

    pub role: Role,

    pub created_at: DateTime<Utc>,
}

/// A user together with their activity counters.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub posts_count: i64,
    pub comments_count: i64,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// List users, newest first.
    async fn list(&self, page: Page) -> Result<Vec<User>, AppError>;

    /// Find a user and count their posts and comments.
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, AppError>;
}

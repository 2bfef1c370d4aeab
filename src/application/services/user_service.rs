//! User Service
//!
//! Members directory and profile lookups.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Page, User, UserProfile, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// List members, newest first
    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Get one member with post and comment counts
    async fn get_user(&self, user_id: Uuid) -> Result<UserProfile, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.user_repo
            .list(page)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))
    }

    async fn get_user(&self, user_id: Uuid) -> Result<UserProfile, UserError> {
        self.user_repo
            .find_profile(user_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)
    }
}

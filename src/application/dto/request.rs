//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Page;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        required(message = "Email and password are required"),
        length(min = 1, message = "Email and password are required")
    )]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Email and password are required"),
        length(min = 1, message = "Email and password are required")
    )]
    pub password: Option<String>,
}

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Create comment request
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Offset/limit query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

/// Feed query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Owner filter parsed from `userId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerFilter {
    /// No filter given
    Everyone,
    /// Posts of this user only
    User(Uuid),
    /// A filter that no stored id can match
    Nobody,
}

impl ListPostsQuery {
    pub fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }

    pub fn owner_filter(&self) -> OwnerFilter {
        match self.user_id.as_deref().map(str::trim) {
            None | Some("") => OwnerFilter::Everyone,
            Some(raw) => Uuid::parse_str(raw)
                .map(OwnerFilter::User)
                .unwrap_or(OwnerFilter::Nobody),
        }
    }
}

//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **TokenService**: session token issue/verify, bearer header parsing
//! - **AuthService**: login and password hashing
//! - **UserService**: members directory and profiles
//! - **PostService**: feed, post detail, post creation and likes
//! - **CommentService**: comments on posts

pub mod auth_service;
pub mod comment_service;
pub mod post_service;
pub mod token_service;
pub mod user_service;

pub use auth_service::{
    hash_password, verify_password, AuthError, AuthService, AuthServiceImpl, LoginOutcome,
    INVALID_CREDENTIALS_MESSAGE,
};
pub use comment_service::{CommentError, CommentService, CommentServiceImpl};
pub use post_service::{PostDetail, PostError, PostService, PostServiceImpl};
pub use token_service::{extract_bearer, Claims, TokenError, TokenService, SESSION_TTL_DAYS};
pub use user_service::{UserError, UserService, UserServiceImpl};

//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - members directory, profiles and credential lookup
//! - **PostRepository** - posts, the feed query and likes
//! - **CommentRepository** - comments on posts
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgCommentRepository, PgPostRepository, PgUserRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let post_repo = PgPostRepository::new(pool.clone());
//!     let comment_repo = PgCommentRepository::new(pool);
//! }
//! ```

pub mod comment_repository;
pub mod post_repository;
pub mod user_repository;

pub use comment_repository::PgCommentRepository;
pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;

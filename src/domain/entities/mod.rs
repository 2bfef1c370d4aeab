//! # Domain Entities
//!
//! Core domain entities of the community server. All entities map directly
//! to their corresponding database tables.
//!
//! - **User**: registered member with credentials and profile
//! - **Post**: a text post with a likes counter
//! - **Comment**: a reply attached to a post
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod comment;
mod post;
mod user;

pub use comment::{AuthoredComment, Comment, CommentRepository};
pub use post::{AuthoredPost, Post, PostRepository, PostSummary, UNKNOWN_AUTHOR};
pub use user::{User, UserProfile, UserRepository};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use user::MockUserRepository;

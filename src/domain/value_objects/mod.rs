//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Role**: member / moderator / admin
//! - **Identity**: the acting user of an authenticated request
//! - **Content**: trimming and length rules for posts and comments
//! - **Page**: offset/limit window for list queries

mod content;
mod identity;
mod page;
mod role;

pub use content::*;
pub use identity::*;
pub use page::*;
pub use role::*;

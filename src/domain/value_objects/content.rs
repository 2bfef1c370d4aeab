//! Text content rules for posts and comments.
//!
//! Content is trimmed before it is measured or stored. Lengths are counted
//! in characters, not bytes.

/// Maximum post length in characters.
pub const MAX_POST_LENGTH: usize = 10_000;

/// Maximum comment length in characters.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Why a piece of content was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content is empty")]
    Empty,

    #[error("content is {length} characters, limit is {max}")]
    TooLong { length: usize, max: usize },
}

/// Trim `raw` and check it holds between 1 and `max` characters.
pub fn normalize_content(raw: &str, max: usize) -> Result<String, ContentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Empty);
    }

    let length = trimmed.chars().count();
    if length > max {
        return Err(ContentError::TooLong { length, max });
    }

    Ok(trimmed.to_string())
}

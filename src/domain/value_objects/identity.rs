//! Acting identity of an authenticated request.

use uuid::Uuid;

use super::Role;

/// The user a request acts as, taken from verified session claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

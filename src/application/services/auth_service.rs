//! Authentication Service
//!
//! Handles credential checks at login and password hashing.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;

use super::token_service::{TokenError, TokenService};
use crate::domain::{Identity, User, UserRepository};
use crate::shared::error::AppError;

/// The only message a client sees for a failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Hash checked when the email is unknown, so both failure paths cost the same.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("dummy-password-for-timing").ok());

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate user with credentials and mint a session token.
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;
}

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Authentication errors
///
/// `UnknownEmail` and `WrongPassword` stay distinct for logs and tests but
/// are reported identically to clients.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No user with this email")]
    UnknownEmail,

    #[error("Password does not match")]
    WrongPassword,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UnknownEmail | AuthError::WrongPassword => {
                AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into())
            }
            e => AppError::Internal(e.to_string()),
        }
    }
}

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Argon2 check on the blocking pool. Without a stored hash the dummy hash is
/// verified instead and the result is always a mismatch.
async fn check_password(password: &str, hash: Option<String>) -> Result<bool, AuthError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&password, dummy);
            }
            Ok(false)
        }
    })
    .await
    .map_err(|e| AuthError::Internal(format!("Password check task failed: {}", e)))?
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let Some(user) = user else {
            check_password(password, None).await?;
            return Err(AuthError::UnknownEmail);
        };

        if !check_password(password, Some(user.password_hash.clone())).await? {
            return Err(AuthError::WrongPassword);
        }

        let identity = Identity {
            user_id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        };
        let token = self.tokens.issue(&identity)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome { token, user })
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, password::PasswordHash, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// A user about to be inserted. The store assigns the id and creation time.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
}

/// What the store knows about a user, including the password hash.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user: User,
    pub password_hash: PasswordHash,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user, failing with `UserAlreadyExists` if the email is taken.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn contains_email(&self, email: &Email) -> Result<bool, UserStoreError>;
    async fn get_credentials(&self, email: &Email) -> Result<StoredCredentials, UserStoreError>;
}

// BannedTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum BannedTokenStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Revoked session tokens, keyed by token id.
#[async_trait]
pub trait BannedTokenStore: Send + Sync {
    /// Ban a token id. `false` means it was already banned; the check and the
    /// insert happen atomically.
    async fn ban_token(&self, token_id: String) -> Result<bool, BannedTokenStoreError>;
    async fn contains_token(&self, token_id: &str) -> Result<bool, BannedTokenStoreError>;
}

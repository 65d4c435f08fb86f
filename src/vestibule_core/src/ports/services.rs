use async_trait::async_trait;
use thiserror::Error;

use super::repositories::UserStoreError;
use crate::domain::{
    password::{Password, PasswordHash},
    signup::{SignupCredentials, SignupOutcome},
    user::User,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Hashing task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

/// Infrastructure failures inside an identity provider.
///
/// Validation failures are not errors: they come back as `SignupOutcome::Rejected`.
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasher(#[from] PasswordHasherError),
}

/// Validates signup credentials and persists the resulting user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn attempt_signup(
        &self,
        credentials: SignupCredentials,
    ) -> Result<SignupOutcome, IdentityProviderError>;
}

/// Turns a user into the JSON structure sent to clients.
pub trait UserSerializer: Send + Sync {
    fn serialize(&self, user: &User) -> serde_json::Value;
}

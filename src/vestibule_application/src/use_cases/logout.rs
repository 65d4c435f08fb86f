use vestibule_core::{BannedTokenStore, BannedTokenStoreError};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session has already been closed")]
    AlreadyRevoked,
    #[error("Banned token store error: {0}")]
    BannedTokenStoreError(#[from] BannedTokenStoreError),
}

/// Logout use case - revokes a session token by its id
#[derive(Clone)]
pub struct LogoutUseCase<B>
where
    B: BannedTokenStore,
{
    banned_token_store: B,
}

impl<B> LogoutUseCase<B>
where
    B: BannedTokenStore,
{
    pub fn new(banned_token_store: B) -> Self {
        Self { banned_token_store }
    }

    /// Execute the logout use case
    ///
    /// # Returns
    /// Ok(()) once the token id is banned, or `AlreadyRevoked` if it was banned before.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, token_id: String) -> Result<(), LogoutError> {
        // Concurrent logouts with one token race here; only the first insert wins
        if !self.banned_token_store.ban_token(token_id).await? {
            return Err(LogoutError::AlreadyRevoked);
        }

        Ok(())
    }
}

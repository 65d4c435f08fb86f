use secrecy::Secret;
use vestibule_core::{
    Email, Password, PasswordHasher, PasswordHasherError, User, UserStore, UserStoreError,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid Email or password.")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Login use case - checks an email/password pair against the user store
#[derive(Clone)]
pub struct LoginUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> LoginUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the login use case
    ///
    /// Unknown emails, malformed input and wrong passwords all yield
    /// `LoginError::InvalidCredentials`, so callers cannot tell them apart.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<User, LoginError> {
        let email = Email::try_from(email).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::try_from(password).map_err(|_| LoginError::InvalidCredentials)?;

        let stored = match self.user_store.get_credentials(&email).await {
            Ok(stored) => stored,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        if !self
            .password_hasher
            .verify(&password, &stored.password_hash)
            .await?
        {
            tracing::debug!(user_id = %stored.user.id(), "password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        Ok(stored.user)
    }
}

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use vestibule_core::{
    Attribute, Email, IdentityProvider, IdentityProviderError, NewUser, Password,
    PasswordError, PasswordHasher, SignupCredentials, SignupOutcome, UserStore, UserStoreError,
    ValidationErrors,
};

const TAKEN: &str = "has already been taken";
const CONFIRMATION_MISMATCH: &str = "doesn't match Password";

/// Signup use case - validates credentials and registers the user.
///
/// This is the default `IdentityProvider`. Validation failures are collected
/// in a fixed order and returned as `SignupOutcome::Rejected`; only store or
/// hasher failures surface as errors.
#[derive(Clone)]
pub struct SignupUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> SignupUseCase<U, H>
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

    /// Execute the signup use case
    ///
    /// # Returns
    /// `Persisted` with the stored user, or `Rejected` with every validation
    /// message in order: email presence, uniqueness, format, then password
    /// presence, confirmation and length.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        credentials: SignupCredentials,
    ) -> Result<SignupOutcome, IdentityProviderError> {
        let mut errors = ValidationErrors::new();

        let email = self.validate_email(credentials.email, &mut errors).await?;
        let password = validate_password(
            credentials.password,
            credentials.password_confirmation.as_ref(),
            &mut errors,
        );

        let (Some(email), Some(password)) = (email, password) else {
            tracing::debug!(errors = errors.len(), "signup rejected");
            return Ok(SignupOutcome::Rejected(errors));
        };
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "signup rejected");
            return Ok(SignupOutcome::Rejected(errors));
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let new_user = NewUser {
            email,
            password_hash,
        };

        match self.user_store.add_user(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id(), "user registered");
                Ok(SignupOutcome::Persisted(user))
            }
            // Lost a race against a concurrent signup for the same address.
            Err(UserStoreError::UserAlreadyExists) => {
                errors.add(Attribute::Email, TAKEN);
                Ok(SignupOutcome::Rejected(errors))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn validate_email(
        &self,
        raw: Secret<String>,
        errors: &mut ValidationErrors,
    ) -> Result<Option<Email>, IdentityProviderError> {
        match Email::try_from(raw) {
            Ok(email) => {
                if self.user_store.contains_email(&email).await? {
                    errors.add(Attribute::Email, TAKEN);
                }
                Ok(Some(email))
            }
            Err(e) => {
                errors.add(Attribute::Email, e.to_string());
                Ok(None)
            }
        }
    }
}

fn validate_password(
    raw: Secret<String>,
    confirmation: Option<&Secret<String>>,
    errors: &mut ValidationErrors,
) -> Option<Password> {
    let confirmation_matches = confirmation
        .map(|c| c.expose_secret() == raw.expose_secret())
        .unwrap_or(true);

    let parsed = Password::try_from(raw);

    if let Err(PasswordError::Blank) = &parsed {
        errors.add(Attribute::Password, PasswordError::Blank.to_string());
    }
    if !confirmation_matches {
        errors.add(Attribute::PasswordConfirmation, CONFIRMATION_MISMATCH);
    }
    if let Err(e @ (PasswordError::TooShort | PasswordError::TooLong)) = &parsed {
        errors.add(Attribute::Password, e.to_string());
    }

    parsed.ok()
}

#[async_trait]
impl<U, H> IdentityProvider for SignupUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    async fn attempt_signup(
        &self,
        credentials: SignupCredentials,
    ) -> Result<SignupOutcome, IdentityProviderError> {
        self.execute(credentials).await
    }
}

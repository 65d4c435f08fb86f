//! In-memory port implementations shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use vestibule_core::{
    Email, NewUser, Password, PasswordHash, PasswordHasher, PasswordHasherError,
    StoredCredentials, User, UserId, UserStore, UserStoreError,
};

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<Email, StoredCredentials>>>,
    hide_existing: bool,
}

impl MockUserStore {
    /// A handle on the same users that reports every email as free, to
    /// simulate a concurrent insert winning the race.
    pub fn hiding_existing(&self) -> Self {
        Self {
            users: self.users.clone(),
            hide_existing: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new(users.len() as i64 + 1);
        let stored = User::new(id, user.email.clone(), Utc::now());
        users.insert(
            user.email,
            StoredCredentials {
                user: stored.clone(),
                password_hash: user.password_hash,
            },
        );
        Ok(stored)
    }

    async fn contains_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        if self.hide_existing {
            return Ok(false);
        }
        Ok(self.users.read().await.contains_key(email))
    }

    async fn get_credentials(&self, email: &Email) -> Result<StoredCredentials, UserStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

/// "Hashes" by prefixing, so tests can run without a real KDF.
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(format!(
            "plain${}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hash.as_ref().expose_secret() == &format!("plain${}", password.as_ref().expose_secret()))
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_owned())
}

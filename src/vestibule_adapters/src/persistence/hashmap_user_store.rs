use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use vestibule_core::{Email, NewUser, StoredCredentials, User, UserId, UserStore, UserStoreError};

#[derive(Default)]
struct Users {
    by_email: HashMap<Email, StoredCredentials>,
    last_id: i64,
}

/// In-memory user store. Ids are assigned sequentially starting at 1.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.by_email.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        users.last_id += 1;
        let stored = User::new(UserId::new(users.last_id), user.email.clone(), Utc::now());
        users.by_email.insert(
            user.email,
            StoredCredentials {
                user: stored.clone(),
                password_hash: user.password_hash,
            },
        );
        Ok(stored)
    }

    async fn contains_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.by_email.contains_key(email))
    }

    async fn get_credentials(&self, email: &Email) -> Result<StoredCredentials, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_email
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

//! In-memory revocation list for session tokens.

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use vestibule_core::{BannedTokenStore, BannedTokenStoreError};

/// Token ids revoked at logout. Clones share one set.
///
/// Entries are never evicted; they live as long as the process.
#[derive(Debug, Default, Clone)]
pub struct HashSetBannedTokenStore {
    revoked: Arc<RwLock<HashSet<String>>>,
}

impl HashSetBannedTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BannedTokenStore for HashSetBannedTokenStore {
    async fn ban_token(&self, token_id: String) -> Result<bool, BannedTokenStoreError> {
        // Membership test and insert under one write guard
        Ok(self.revoked.write().await.insert(token_id))
    }

    async fn contains_token(&self, token_id: &str) -> Result<bool, BannedTokenStoreError> {
        Ok(self.revoked.read().await.contains(token_id))
    }
}

//! In-memory key repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use octoauth_application::ports::{KeyRepository, KeyStoreError};
use octoauth_domain::CredentialKey;

/// Key repository held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryKeyRepository {
    keys: RwLock<BTreeMap<String, CredentialKey>>,
}

impl InMemoryKeyRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with keys. Later duplicates replace earlier ones.
    #[must_use]
    pub fn with_keys(keys: impl IntoIterator<Item = CredentialKey>) -> Self {
        Self {
            keys: RwLock::new(keys.into_iter().map(|k| (k.id.clone(), k)).collect()),
        }
    }
}

#[async_trait]
impl KeyRepository for InMemoryKeyRepository {
    async fn load(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError> {
        Ok(self.keys.read().await.get(id).cloned())
    }

    async fn save(&self, key: CredentialKey) -> Result<(), KeyStoreError> {
        key.validate()?;
        self.keys.write().await.insert(key.id.clone(), key);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError> {
        Ok(self.keys.write().await.remove(id))
    }

    async fn list(&self) -> Result<Vec<CredentialKey>, KeyStoreError> {
        Ok(self.keys.read().await.values().cloned().collect())
    }
}

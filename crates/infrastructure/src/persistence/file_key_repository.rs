//! File-based key repository.
//!
//! All keys live in a single JSON document. Keep it out of version control.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use octoauth_application::ports::{KeyRepository, KeyStoreError};
use octoauth_domain::CredentialKey;

use crate::serialization::{from_json_bytes, to_json_stable};

/// Format version written to new documents.
pub const KEYS_SCHEMA_VERSION: u32 = 1;

/// On-disk layout:
/// ```json
/// {
///   "schema_version": 1,
///   "keys": {
///     "github_app": {
///       "id": "github_app",
///       "label": "GitHub app",
///       "key_type": "oauth_client",
///       "values": { "client_id": "Iv1.abc", "client_secret": "..." }
///     }
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct KeyDocument {
    schema_version: u32,
    #[serde(default)]
    keys: BTreeMap<String, CredentialKey>,
}

impl Default for KeyDocument {
    fn default() -> Self {
        Self {
            schema_version: KEYS_SCHEMA_VERSION,
            keys: BTreeMap::new(),
        }
    }
}

/// Key repository persisted to a JSON file.
///
/// Writes are serialized through an internal lock so concurrent saves from
/// one process do not lose updates. A missing file reads as an empty store.
#[derive(Debug)]
pub struct FileKeyRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyRepository {
    /// Creates a repository backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<KeyDocument, KeyStoreError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(KeyDocument::default()),
            Err(e) => return Err(e.into()),
        };

        let document: KeyDocument =
            from_json_bytes(&content).map_err(|e| KeyStoreError::Serialization(e.to_string()))?;

        if document.schema_version > KEYS_SCHEMA_VERSION {
            return Err(KeyStoreError::Serialization(format!(
                "unsupported schema version {} in {}",
                document.schema_version,
                self.path.display()
            )));
        }

        Ok(document)
    }

    async fn write_document(&self, document: &KeyDocument) -> Result<(), KeyStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content =
            to_json_stable(document).map_err(|e| KeyStoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, content).await?;

        debug!(path = %self.path.display(), keys = document.keys.len(), "wrote key store");
        Ok(())
    }
}

#[async_trait]
impl KeyRepository for FileKeyRepository {
    async fn load(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError> {
        Ok(self.read_document().await?.keys.remove(id))
    }

    async fn save(&self, key: CredentialKey) -> Result<(), KeyStoreError> {
        key.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.schema_version = KEYS_SCHEMA_VERSION;
        document.keys.insert(key.id.clone(), key);
        self.write_document(&document).await
    }

    async fn remove(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        let removed = document.keys.remove(id);
        if removed.is_some() {
            self.write_document(&document).await?;
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<CredentialKey>, KeyStoreError> {
        Ok(self.read_document().await?.keys.into_values().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use octoauth_domain::KeyType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> FileKeyRepository {
        FileKeyRepository::new(dir.path().join("nested").join("keys.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.load("gh").await.unwrap(), None);
        assert_eq!(repo.remove("gh").await.unwrap(), None);
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let key = CredentialKey::oauth_client("gh", "Iv1.abc", "shh");

        repo(&dir).save(key.clone()).await.unwrap();

        let reopened = repo(&dir);
        assert_eq!(reopened.load("gh").await.unwrap(), Some(key));
    }

    #[tokio::test]
    async fn test_document_layout() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.save(CredentialKey::oauth_client("b", "1", "2")).await.unwrap();
        repo.save(CredentialKey::oauth_client("a", "3", "4")).await.unwrap();

        let content = tokio::fs::read_to_string(repo.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["keys"]["a"]["key_type"], "oauth_client");
        assert!(content.find("\"a\"").unwrap() < content.find("\"b\"").unwrap());
        assert!(content.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let key = CredentialKey::oauth_client("gh", "1", "2");
        repo.save(key.clone()).await.unwrap();

        assert_eq!(repo.remove("gh").await.unwrap(), Some(key));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_key() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let err = repo
            .save(CredentialKey::new("x", KeyType::OauthClient).with_value("client_id", "1"))
            .await
            .unwrap_err();

        assert!(matches!(err, KeyStoreError::Invalid(_)));
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let err = FileKeyRepository::new(path).list().await.unwrap_err();
        assert!(matches!(err, KeyStoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_future_schema_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.json");
        tokio::fs::write(&path, br#"{"schema_version": 2, "keys": {}}"#)
            .await
            .unwrap();

        let err = FileKeyRepository::new(path).list().await.unwrap_err();
        assert!(matches!(err, KeyStoreError::Serialization(msg) if msg.contains("version 2")));
    }
}

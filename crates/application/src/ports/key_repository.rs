//! Key repository port
//!
//! Defines the interface to the credential key store.

use async_trait::async_trait;

use octoauth_domain::{CredentialKey, DomainError};

/// Errors that can occur during key store operations.
#[derive(Debug, thiserror::Error)]
pub enum KeyStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The key does not satisfy its type's required fields.
    #[error("invalid key: {0}")]
    Invalid(#[from] DomainError),
}

/// Repository trait for credential keys.
#[async_trait]
pub trait KeyRepository: Send + Sync {
    /// Loads a key by id.
    ///
    /// # Returns
    /// `None` if no key has that id.
    async fn load(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError>;

    /// Saves a key, replacing any key with the same id.
    ///
    /// # Errors
    /// Returns [`KeyStoreError::Invalid`] if the key fails validation.
    async fn save(&self, key: CredentialKey) -> Result<(), KeyStoreError>;

    /// Removes a key.
    ///
    /// # Returns
    /// The removed key, if it existed.
    async fn remove(&self, id: &str) -> Result<Option<CredentialKey>, KeyStoreError>;

    /// Lists all keys in id order.
    async fn list(&self) -> Result<Vec<CredentialKey>, KeyStoreError>;
}

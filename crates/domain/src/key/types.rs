//! Credential key records and key types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Field name holding an OAuth client identifier.
pub const CLIENT_ID_FIELD: &str = "client_id";
/// Field name holding an OAuth client secret.
pub const CLIENT_SECRET_FIELD: &str = "client_secret";

/// Closed set of key types the key store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// OAuth client registration: `client_id` and `client_secret`.
    OauthClient,
    /// A previously issued access token.
    AccessToken,
    /// A single opaque secret value.
    Authentication,
}

impl KeyType {
    /// Value fields a key of this type must carry.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::OauthClient => &[CLIENT_ID_FIELD, CLIENT_SECRET_FIELD],
            Self::AccessToken => &["access_token"],
            Self::Authentication => &["value"],
        }
    }

    /// Returns the type as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OauthClient => "oauth_client",
            Self::AccessToken => "access_token",
            Self::Authentication => "authentication",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed secret record owned by the key store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialKey {
    /// Unique key identifier.
    pub id: String,
    /// Human readable label.
    #[serde(default)]
    pub label: String,
    /// Shape of the values.
    pub key_type: KeyType,
    /// Field name to secret value.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl CredentialKey {
    /// Creates a key with no values.
    #[must_use]
    pub fn new(id: impl Into<String>, key_type: KeyType) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            key_type,
            values: BTreeMap::new(),
        }
    }

    /// Creates an OAuth client key.
    #[must_use]
    pub fn oauth_client(
        id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self::new(id, KeyType::OauthClient)
            .with_value(CLIENT_ID_FIELD, client_id)
            .with_value(CLIENT_SECRET_FIELD, client_secret)
    }

    /// Sets a value, returning the key.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Sets the label, returning the key.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Gets a value by field name.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Fails unless the key has the given type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CredentialTypeMismatch`] when the types differ.
    pub fn expect_type(&self, expected: KeyType) -> DomainResult<()> {
        if self.key_type == expected {
            Ok(())
        } else {
            Err(DomainError::CredentialTypeMismatch {
                key_id: self.id.clone(),
                expected,
                found: self.key_type,
            })
        }
    }

    /// Checks that every field required by the key type is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingCredentialField`] naming the first gap.
    pub fn validate(&self) -> DomainResult<()> {
        for field in self.key_type.required_fields() {
            self.required(field)?;
        }
        Ok(())
    }

    /// Reads the OAuth client credentials held by this key.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CredentialTypeMismatch`] for non OAuth client keys
    /// and [`DomainError::MissingCredentialField`] when a field is absent or empty.
    pub fn oauth_client_credentials(&self) -> DomainResult<OauthClientCredentials> {
        self.expect_type(KeyType::OauthClient)?;
        Ok(OauthClientCredentials {
            client_id: self.required(CLIENT_ID_FIELD)?.to_string(),
            client_secret: self.required(CLIENT_SECRET_FIELD)?.to_string(),
        })
    }

    fn required(&self, field: &str) -> DomainResult<&str> {
        self.value(field)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::MissingCredentialField {
                key_id: self.id.clone(),
                field: field.to_string(),
            })
    }
}

/// Client id and secret read from an OAuth client key.
#[derive(Clone, PartialEq, Eq)]
pub struct OauthClientCredentials {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
}

impl fmt::Debug for OauthClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OauthClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

//! Provider options passed by the host when it creates a provider instance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::key::OauthClientCredentials;

/// Option carrying the OAuth client identifier.
pub const CLIENT_ID: &str = "clientId";
/// Option carrying the OAuth client secret.
pub const CLIENT_SECRET: &str = "clientSecret";
/// Option carrying the redirect URI registered with the provider.
pub const REDIRECT_URI: &str = "redirectUri";
/// Option selecting the provider base domain (GitHub Enterprise).
pub const DOMAIN: &str = "domain";
/// Option carrying comma separated default scopes.
pub const SCOPE: &str = "scope";

/// Mapping from option name to value used to parametrize a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderOptions(BTreeMap<String, String>);

impl ProviderOptions {
    /// Creates an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets an option, returning the set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an option, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Gets an option value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Gets an option value, treating an empty string as absent.
    #[must_use]
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Merges client credentials into the options.
    ///
    /// Credential values always replace same-named caller options.
    #[must_use]
    pub fn with_credentials(mut self, credentials: &OauthClientCredentials) -> Self {
        self.insert(CLIENT_ID, credentials.client_id.clone());
        self.insert(CLIENT_SECRET, credentials.client_secret.clone());
        self
    }

    /// Iterates over option names and values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

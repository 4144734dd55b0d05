//! Authenticated identities as reported by identity providers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider family name of GitHub resource owners.
pub const GITHUB_PROVIDER: &str = "github";

/// Default public GitHub domain.
pub const GITHUB_DOMAIN: &str = "https://github.com";

/// An authenticated end-user identity, tagged by provider family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceOwner {
    /// Identity returned by the GitHub user API.
    Github(GithubResourceOwner),
    /// Identity from any other provider family.
    Generic(GenericResourceOwner),
}

impl ResourceOwner {
    /// Provider family this owner belongs to.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Github(_) => GITHUB_PROVIDER,
            Self::Generic(owner) => &owner.provider,
        }
    }

    /// Raw field map as returned by the provider.
    #[must_use]
    pub const fn to_array(&self) -> &Map<String, Value> {
        match self {
            Self::Github(owner) => owner.to_array(),
            Self::Generic(owner) => &owner.raw,
        }
    }
}

/// GitHub user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubResourceOwner {
    raw: Map<String, Value>,
    domain: String,
}

impl GithubResourceOwner {
    /// Wraps a raw `/user` payload fetched from `domain`.
    #[must_use]
    pub fn new(raw: Map<String, Value>, domain: impl Into<String>) -> Self {
        Self {
            raw,
            domain: domain.into(),
        }
    }

    /// Wraps a raw payload fetched from public GitHub.
    #[must_use]
    pub fn from_github(raw: Map<String, Value>) -> Self {
        Self::new(raw, GITHUB_DOMAIN)
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Login handle.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.str_field("login")
    }

    /// Public or primary email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    /// Replaces the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.raw.insert("email".to_string(), Value::String(email.into()));
    }

    /// Profile URL on the originating domain, when the login is known.
    ///
    /// Without a login this is `None` rather than the bare domain, so a
    /// profile link is never rendered pointing at the site root.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.nickname()
            .map(|login| format!("{}/{login}", self.domain.trim_end_matches('/')))
    }

    /// Domain the profile was fetched from.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// String field from the raw payload.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    /// Raw payload.
    #[must_use]
    pub const fn to_array(&self) -> &Map<String, Value> {
        &self.raw
    }
}

/// Identity from a provider family without a dedicated type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResourceOwner {
    /// Provider family name.
    pub provider: String,
    /// Raw payload.
    #[serde(default)]
    pub raw: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn octocat() -> Map<String, Value> {
        json!({
            "id": 583_231,
            "login": "octocat",
            "name": "The Octocat",
            "email": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "location": "San Francisco"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_github_accessors() {
        let owner = GithubResourceOwner::from_github(octocat());
        assert_eq!(owner.name(), Some("The Octocat"));
        assert_eq!(owner.nickname(), Some("octocat"));
        assert_eq!(owner.email(), None);
        assert_eq!(owner.url().as_deref(), Some("https://github.com/octocat"));
    }

    #[test]
    fn test_enterprise_url() {
        let owner = GithubResourceOwner::new(octocat(), "https://git.example.com/");
        assert_eq!(owner.url().as_deref(), Some("https://git.example.com/octocat"));
    }

    #[test]
    fn test_url_without_login() {
        let owner = GithubResourceOwner::from_github(Map::new());
        assert_eq!(owner.url(), None);
    }

    #[test]
    fn test_provider_names() {
        let github = ResourceOwner::Github(GithubResourceOwner::from_github(octocat()));
        let other = ResourceOwner::Generic(GenericResourceOwner {
            provider: "gitlab".to_string(),
            raw: Map::new(),
        });
        assert_eq!(github.provider(), "github");
        assert_eq!(other.provider(), "gitlab");
        assert_eq!(github.to_array()["login"], "octocat");
    }
}

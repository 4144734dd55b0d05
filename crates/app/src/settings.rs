//! Host settings loaded from file and environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;

use octoauth_domain::options::{DOMAIN, REDIRECT_URI, SCOPE};
use octoauth_domain::{Configuration, ProviderOptions};
use octoauth_infrastructure::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Settings file read from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "octoauth.toml";

/// Prefix of environment overrides, e.g. `OCTOAUTH_GITHUB__DOMAIN`.
const ENV_PREFIX: &str = "OCTOAUTH";

/// HTTP transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpSettings {
    /// Timeout as a duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Provider options applied to every GitHub session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// Redirect URI registered with the OAuth app.
    pub redirect_uri: Option<String>,
    /// GitHub Enterprise base URL.
    pub domain: Option<String>,
    /// Comma separated default scopes.
    pub scopes: Option<String>,
}

impl GithubSettings {
    /// Converts to provider options, skipping unset values.
    #[must_use]
    pub fn provider_options(&self) -> ProviderOptions {
        [
            (REDIRECT_URI, &self.redirect_uri),
            (DOMAIN, &self.domain),
            (SCOPE, &self.scopes),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP transport.
    pub http: HttpSettings,
    /// Key store document.
    pub keys_file: PathBuf,
    /// GitHub provider options.
    pub github: GithubSettings,
    /// Plugin configuration map.
    pub plugin: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpSettings::default(),
            keys_file: PathBuf::from("octoauth-keys.json"),
            github: GithubSettings::default(),
            plugin: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from `path` (required) or the optional default file,
    /// then applies `OCTOAUTH_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any source is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Plugin configuration as passed to `set_configuration`.
    #[must_use]
    pub fn plugin_configuration(&self) -> Configuration {
        Configuration::from(self.plugin.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("octoauth.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::load_with_env(None, Some(config::Map::new())).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.http.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_file_values() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(
            &dir,
            r#"
keys_file = "/var/lib/octoauth/keys.json"

[http]
timeout_secs = 5

[github]
redirect_uri = "https://app.test/callback"
scopes = "read:user,user:email"

[plugin]
theme = "dark"
"#,
        );

        let settings = Settings::load_with_env(Some(&path), Some(config::Map::new())).unwrap();

        assert_eq!(settings.keys_file, PathBuf::from("/var/lib/octoauth/keys.json"));
        assert_eq!(settings.http.timeout_secs, 5);
        assert_eq!(settings.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            settings.plugin_configuration(),
            Configuration::new().with("theme", "dark")
        );

        let options = settings.github.provider_options();
        assert_eq!(options.get(REDIRECT_URI), Some("https://app.test/callback"));
        assert_eq!(options.get(SCOPE), Some("read:user,user:email"));
        assert_eq!(options.get(DOMAIN), None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir, "[github]\ndomain = \"https://github.com\"\n");

        let mut env = config::Map::new();
        env.insert(
            "OCTOAUTH_GITHUB__DOMAIN".to_string(),
            "https://git.example.com".to_string(),
        );
        env.insert("OCTOAUTH_KEYS_FILE".to_string(), "keys.json".to_string());

        let settings = Settings::load_with_env(Some(&path), Some(env)).unwrap();

        assert_eq!(settings.github.domain.as_deref(), Some("https://git.example.com"));
        assert_eq!(settings.keys_file, PathBuf::from("keys.json"));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load_with_env(Some(&missing), Some(config::Map::new())).is_err());
    }
}

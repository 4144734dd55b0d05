//! Subcommand implementations.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use octoauth_application::ports::{HttpTransport, KeyRepository};
use octoauth_application::use_cases::{OpenSession, OpenSessionInput};
use octoauth_application::{OauthSession, PluginRegistry};
use octoauth_domain::{AccessToken, CredentialKey};
use octoauth_infrastructure::{FileKeyRepository, GithubOauthPlugin, ReqwestTransport};

use crate::cli::Command;
use crate::settings::Settings;

/// Wiring shared by all subcommands.
pub struct Host {
    settings: Settings,
    registry: PluginRegistry,
}

impl Host {
    /// Builds the transport and registers the plugins.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be created.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(
            ReqwestTransport::new(&settings.http.user_agent, settings.http.timeout())
                .context("failed to create HTTP transport")?,
        );

        let mut registry = PluginRegistry::new();
        registry.register(Arc::new(GithubOauthPlugin::new(
            settings.plugin_configuration(),
            transport,
        )))?;

        Ok(Self { settings, registry })
    }

    fn keys(&self) -> FileKeyRepository {
        FileKeyRepository::new(&self.settings.keys_file)
    }

    async fn session(&self, plugin_id: &str, key_id: &str) -> anyhow::Result<OauthSession> {
        let session = OpenSession::new(&self.registry, self.keys())
            .execute(OpenSessionInput {
                plugin_id: plugin_id.to_string(),
                key_id: key_id.to_string(),
                provider_options: self.settings.github.provider_options(),
            })
            .await?;
        Ok(session)
    }

    /// Runs one subcommand and prints its result as JSON.
    ///
    /// # Errors
    ///
    /// Returns any failure from the key store, the plugin, or the provider.
    pub async fn run(&self, plugin_id: &str, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Plugins => print_json(&self.registry.definitions()),
            Command::Authorize { key, scopes } => {
                let request = self
                    .session(plugin_id, &key)
                    .await?
                    .authorization_request(&scopes)?;
                print_json(&serde_json::json!({
                    "url": request.url,
                    "state": request.state,
                }))
            }
            Command::Exchange { key, code } => {
                let token = self.session(plugin_id, &key).await?.exchange_code(&code).await?;
                log_token(&token);
                print_json(&token)
            }
            Command::Refresh { key, refresh_token } => {
                let token = self
                    .session(plugin_id, &key)
                    .await?
                    .refresh_token(&refresh_token)
                    .await?;
                log_token(&token);
                print_json(&token)
            }
            Command::Whoami { key, token } => {
                let session = self.session(plugin_id, &key).await?;
                let token = AccessToken::new(token, "bearer".to_string(), None, None, Vec::new());
                let owner = session.resource_owner(&token).await?;

                let plugin = self.registry.get(plugin_id)?;
                let model = plugin.render_resource_owner(&owner)?;
                print_json(&model.into_template(plugin.definition().owner_template))
            }
            Command::Keys => {
                let listing: Vec<_> = self
                    .keys()
                    .list()
                    .await?
                    .into_iter()
                    .map(|k| {
                        serde_json::json!({"id": k.id, "label": k.label, "key_type": k.key_type})
                    })
                    .collect();
                print_json(&listing)
            }
            Command::AddKey {
                id,
                label,
                client_id,
                client_secret,
            } => {
                let mut key = CredentialKey::oauth_client(id, client_id, client_secret);
                if let Some(label) = label {
                    key = key.with_label(label);
                }
                let key_id = key.id.clone();
                self.keys().save(key).await?;
                info!(
                    key = %key_id,
                    path = %self.settings.keys_file.display(),
                    "stored OAuth client key"
                );
                Ok(())
            }
        }
    }
}

fn log_token(token: &AccessToken) {
    info!(
        expires_at = ?token.expires_at,
        refreshable = token.can_refresh(),
        "obtained access token"
    );
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

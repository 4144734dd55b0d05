//! Open session use case

use tracing::debug;

use octoauth_domain::ProviderOptions;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::KeyRepository;
use crate::registry::PluginRegistry;
use crate::session::OauthSession;

/// Input naming the plugin and stored key to use.
#[derive(Debug, Clone, Default)]
pub struct OpenSessionInput {
    /// Registered plugin id.
    pub plugin_id: String,
    /// Id of the OAuth client key in the key store.
    pub key_id: String,
    /// Extra provider options.
    pub provider_options: ProviderOptions,
}

/// Resolves a stored key and creates a session through a registered plugin.
pub struct OpenSession<'a, R> {
    registry: &'a PluginRegistry,
    keys: R,
}

impl<'a, R: KeyRepository> OpenSession<'a, R> {
    /// Creates a new `OpenSession` use case.
    pub const fn new(registry: &'a PluginRegistry, keys: R) -> Self {
        Self { registry, keys }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns [`ApplicationError::PluginNotFound`], [`ApplicationError::KeyNotFound`],
    /// key store failures, or the plugin's credential errors.
    pub async fn execute(&self, input: OpenSessionInput) -> ApplicationResult<OauthSession> {
        let plugin = self.registry.get(&input.plugin_id)?;
        let key = self
            .keys
            .load(&input.key_id)
            .await?
            .ok_or_else(|| ApplicationError::KeyNotFound(input.key_id.clone()))?;

        debug!(plugin = %input.plugin_id, key = %key.id, "opening OAuth session");
        Ok(plugin.create_instance(input.provider_options, &key)?)
    }
}

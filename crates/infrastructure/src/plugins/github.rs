//! GitHub OAuth provider plugin.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use octoauth_application::ports::HttpTransport;
use octoauth_application::{ConfigurablePlugin, OauthProviderPlugin, OauthSession, PluginForm};
use octoauth_domain::resource_owner::GITHUB_PROVIDER;
use octoauth_domain::{
    Configuration, CredentialKey, DomainError, DomainResult, Form, FormElement, FormElementKind,
    FormState, KeyType, PluginDefinition, ProviderOptions, RenderModel, ResourceOwner,
};

use crate::providers::GithubProvider;

/// Registration id.
pub const PLUGIN_ID: &str = "octoauth_github";

/// Template rendering GitHub resource owners.
pub const OWNER_TEMPLATE: &str = "octoauth_github_resource_owner";

const DEFINITION: PluginDefinition = PluginDefinition {
    id: PLUGIN_ID,
    label: "GitHub",
    refresh_token: true,
    owner_template: OWNER_TEMPLATE,
};

/// Adapts [`GithubProvider`] to the host's plugin contract.
pub struct GithubOauthPlugin {
    configuration: Configuration,
    transport: Arc<dyn HttpTransport>,
}

impl GithubOauthPlugin {
    /// Creates the plugin with its configuration and the transport every
    /// provider it builds will use.
    #[must_use]
    pub fn new(configuration: Configuration, transport: Arc<dyn HttpTransport>) -> Self {
        let mut plugin = Self {
            configuration: Configuration::new(),
            transport,
        };
        plugin.set_configuration(configuration);
        plugin
    }

    /// Builds a provider from caller options and an OAuth client key.
    ///
    /// The key's client id and secret replace any same-named option.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CredentialTypeMismatch`] for keys of another
    /// type, [`DomainError::MissingCredentialField`] for incomplete keys, and
    /// provider option errors.
    pub fn create_provider(
        &self,
        provider_options: ProviderOptions,
        client_key: &CredentialKey,
    ) -> DomainResult<GithubProvider> {
        let credentials = client_key.oauth_client_credentials()?;
        let options = provider_options.with_credentials(&credentials);

        debug!(
            key = %client_key.id,
            client_id = %credentials.client_id,
            "creating GitHub provider"
        );
        GithubProvider::new(options, Arc::clone(&self.transport))
    }
}

impl std::fmt::Debug for GithubOauthPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubOauthPlugin")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

impl OauthProviderPlugin for GithubOauthPlugin {
    fn definition(&self) -> PluginDefinition {
        DEFINITION
    }

    fn create_instance(
        &self,
        provider_options: ProviderOptions,
        client_key: &CredentialKey,
    ) -> DomainResult<OauthSession> {
        client_key.expect_type(KeyType::OauthClient)?;
        let provider = self.create_provider(provider_options, client_key)?;
        Ok(OauthSession::new(provider))
    }

    fn render_resource_owner(&self, resource_owner: &ResourceOwner) -> DomainResult<RenderModel> {
        let ResourceOwner::Github(owner) = resource_owner else {
            return Err(DomainError::ResourceOwnerTypeMismatch {
                expected: GITHUB_PROVIDER.to_string(),
                found: resource_owner.provider().to_string(),
            });
        };

        let raw = |key: &str| {
            owner
                .to_array()
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Ok(RenderModel {
            name: owner.name().map(str::to_string),
            username: raw("login"),
            url: owner.url(),
            avatar_url: raw("avatar_url"),
            location: raw("location"),
        })
    }
}

impl ConfigurablePlugin for GithubOauthPlugin {
    fn default_configuration(&self) -> Configuration {
        Configuration::new()
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration.merged_over(&self.default_configuration());
    }
}

impl PluginForm for GithubOauthPlugin {
    fn build_configuration_form(&self, mut form: Form, _form_state: &FormState) -> Form {
        // Placeholder element; nothing reads it back.
        form.insert("foo", FormElement::new(FormElementKind::Textarea));
        form
    }

    fn validate_configuration_form(&self, _form: &Form, _form_state: &mut FormState) {}

    fn submit_configuration_form(&mut self, _form: &Form, _form_state: &FormState) {}
}

//! Plugin contracts the host expects from OAuth provider plugins.

use octoauth_domain::{
    Configuration, CredentialKey, DomainResult, Form, FormState, PluginDefinition,
    ProviderOptions, RenderModel, ResourceOwner,
};

use crate::session::OauthSession;

/// An OAuth provider plugin.
///
/// All operations are synchronous. Failures are raised at the point of
/// misuse and are not recovered here.
pub trait OauthProviderPlugin: Send + Sync {
    /// Registration record.
    fn definition(&self) -> PluginDefinition;

    /// Creates a session bound to the credentials in `client_key`.
    ///
    /// Performs no network I/O.
    ///
    /// # Errors
    /// Returns [`octoauth_domain::DomainError::CredentialTypeMismatch`] if the
    /// key is not an OAuth client key, and
    /// [`octoauth_domain::DomainError::MissingCredentialField`] if it lacks
    /// a client id or secret.
    fn create_instance(
        &self,
        provider_options: ProviderOptions,
        client_key: &CredentialKey,
    ) -> DomainResult<OauthSession>;

    /// Projects an identity from this plugin's provider family into template data.
    ///
    /// # Errors
    /// Returns [`octoauth_domain::DomainError::ResourceOwnerTypeMismatch`]
    /// for owners from another provider family.
    fn render_resource_owner(&self, resource_owner: &ResourceOwner) -> DomainResult<RenderModel>;
}

/// A plugin holding a configuration map.
pub trait ConfigurablePlugin {
    /// Configuration a new instance starts with.
    fn default_configuration(&self) -> Configuration;

    /// Current configuration.
    fn configuration(&self) -> &Configuration;

    /// Replaces the configuration, filling gaps from the defaults.
    fn set_configuration(&mut self, configuration: Configuration);
}

/// A plugin contributing a settings form.
pub trait PluginForm {
    /// Adds this plugin's elements to `form`.
    fn build_configuration_form(&self, form: Form, form_state: &FormState) -> Form;

    /// Checks submitted values before they are applied.
    fn validate_configuration_form(&self, form: &Form, form_state: &mut FormState);

    /// Applies submitted values.
    fn submit_configuration_form(&mut self, form: &Form, form_state: &FormState);
}

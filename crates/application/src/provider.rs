//! OAuth provider trait.
//!
//! A provider implements the authorization-code exchange for one identity
//! provider API. Plugins build providers; sessions drive them.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use octoauth_domain::{AccessToken, ProviderOptions, ResourceOwner, TokenGrant};

use crate::error::ApplicationResult;

/// Boxed future returned by provider network operations.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = ApplicationResult<T>> + Send + 'a>>;

/// Trait for concrete OAuth2 providers.
pub trait OauthProvider: fmt::Debug + Send + Sync {
    /// Provider family name (e.g. "github").
    fn name(&self) -> &str;

    /// Options the provider was constructed with, credentials included.
    fn options(&self) -> &ProviderOptions;

    /// Builds the URL the user agent is sent to for authorization.
    ///
    /// # Arguments
    /// * `state` - Opaque value echoed back to the redirect URI.
    /// * `scopes` - Scopes to request; empty means the provider defaults.
    ///
    /// # Errors
    /// Returns an error if the configured endpoint is not a valid URL.
    fn authorization_url(&self, state: &str, scopes: &[String]) -> ApplicationResult<String>;

    /// Presents a grant to the token endpoint.
    fn access_token(&self, grant: TokenGrant) -> ProviderFuture<'_, AccessToken>;

    /// Fetches the identity the token belongs to.
    fn resource_owner<'a>(&'a self, token: &'a AccessToken) -> ProviderFuture<'a, ResourceOwner>;
}

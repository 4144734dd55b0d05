//! OAuth session handed to the host.

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::debug;

use octoauth_domain::{AccessToken, ResourceOwner, TokenGrant};

use crate::error::ApplicationResult;
use crate::provider::OauthProvider;

/// Length of generated `state` values.
const STATE_LENGTH: usize = 32;

/// URL and state for one authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// Where to send the user agent.
    pub url: String,
    /// Value the provider must echo back.
    pub state: String,
}

impl AuthorizationRequest {
    /// Checks the state returned to the redirect URI.
    #[must_use]
    pub fn matches_state(&self, returned: &str) -> bool {
        !returned.is_empty() && self.state == returned
    }
}

/// One authorization flow against a ready-to-use provider.
#[derive(Debug)]
pub struct OauthSession {
    provider: Box<dyn OauthProvider>,
}

impl OauthSession {
    /// Wraps a provider.
    #[must_use]
    pub fn new(provider: impl OauthProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// The wrapped provider.
    #[must_use]
    pub fn provider(&self) -> &dyn OauthProvider {
        self.provider.as_ref()
    }

    /// Starts an authorization attempt with a fresh random state.
    ///
    /// # Errors
    /// Returns an error if the provider cannot build its authorization URL.
    pub fn authorization_request(
        &self,
        scopes: &[String],
    ) -> ApplicationResult<AuthorizationRequest> {
        let state = generate_state();
        let url = self.provider.authorization_url(&state, scopes)?;
        debug!(provider = self.provider.name(), "built authorization URL");
        Ok(AuthorizationRequest { url, state })
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    /// Returns transport errors and errors reported by the token endpoint.
    pub async fn exchange_code(&self, code: &str) -> ApplicationResult<AccessToken> {
        self.provider
            .access_token(TokenGrant::AuthorizationCode {
                code: code.to_string(),
            })
            .await
    }

    /// Obtains a new access token from a refresh token.
    ///
    /// # Errors
    /// Returns transport errors and errors reported by the token endpoint.
    pub async fn refresh_token(&self, refresh_token: &str) -> ApplicationResult<AccessToken> {
        self.provider
            .access_token(TokenGrant::RefreshToken {
                refresh_token: refresh_token.to_string(),
            })
            .await
    }

    /// Fetches the identity the token belongs to.
    ///
    /// # Errors
    /// Returns transport errors and errors reported by the user API.
    pub async fn resource_owner(&self, token: &AccessToken) -> ApplicationResult<ResourceOwner> {
        self.provider.resource_owner(token).await
    }
}

fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

//! Application error types

use thiserror::Error;
use octoauth_domain::DomainError;

use crate::ports::{KeyStoreError, TransportError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The OAuth server rejected the request.
    #[error("OAuth server error: {error}{}", describe(.description))]
    OauthServer {
        /// Error code or message returned by the server.
        error: String,
        /// Optional human readable description.
        description: Option<String>,
    },

    /// The server answered with something that could not be interpreted.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A plugin with the same id is already registered.
    #[error("plugin already registered: {0}")]
    DuplicatePlugin(String),

    /// No plugin is registered under the id.
    #[error("plugin not found: {0}")]
    PluginNotFound(String),

    /// No key is stored under the id.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The key store failed.
    #[error("key store error: {0}")]
    KeyStore(#[from] KeyStoreError),
}

#[allow(clippy::ref_option)]
fn describe(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

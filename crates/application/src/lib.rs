//! Octoauth Application - Ports, provider contracts and use cases
//!
//! This crate defines the seams between the adapter and its host: the
//! transport and key store ports, the provider and plugin traits, the
//! session handed to the host, and the plugin registry.

pub mod error;
pub mod plugin;
pub mod ports;
pub mod provider;
pub mod registry;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use plugin::{ConfigurablePlugin, OauthProviderPlugin, PluginForm};
pub use provider::{OauthProvider, ProviderFuture};
pub use registry::PluginRegistry;
pub use session::{AuthorizationRequest, OauthSession};

//! Octoauth Domain - Core types
//!
//! This crate defines the domain model of the GitHub OAuth provider adapter.
//! All types here are pure Rust with no I/O dependencies.

pub mod configuration;
pub mod error;
pub mod form;
pub mod http;
pub mod key;
pub mod options;
pub mod plugin;
pub mod render;
pub mod resource_owner;
pub mod token;

pub use configuration::Configuration;
pub use error::{DomainError, DomainResult};
pub use form::{Form, FormElement, FormElementKind, FormState};
pub use http::{HttpMethod, TransportRequest, TransportResponse};
pub use key::{CredentialKey, KeyType, OauthClientCredentials};
pub use options::ProviderOptions;
pub use plugin::PluginDefinition;
pub use render::{RenderModel, TemplateData};
pub use resource_owner::{GenericResourceOwner, GithubResourceOwner, ResourceOwner};
pub use token::{AccessToken, TokenGrant};

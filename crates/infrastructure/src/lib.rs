//! Octoauth Infrastructure - Adapters and implementations
//!
//! This crate provides the GitHub provider and its plugin adapter, plus
//! concrete implementations of the ports defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod plugins;
pub mod providers;
pub mod serialization;

pub use adapters::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, RecordingTransport, ReqwestTransport};
pub use persistence::{FileKeyRepository, InMemoryKeyRepository};
pub use plugins::GithubOauthPlugin;
pub use providers::GithubProvider;
pub use serialization::{SerializationError, from_json_bytes, to_json_stable};

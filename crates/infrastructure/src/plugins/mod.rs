//! OAuth provider plugins offered to the host.

mod github;

pub use github::{GithubOauthPlugin, OWNER_TEMPLATE, PLUGIN_ID};

//! Concrete OAuth providers.

mod github;

pub use github::GithubProvider;

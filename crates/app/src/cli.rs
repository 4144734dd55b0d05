//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drives the GitHub OAuth provider adapter from the command line.
#[derive(Parser, Debug)]
#[command(name = "octoauth", version, about)]
pub struct Cli {
    /// Settings file (defaults to ./octoauth.toml when present).
    #[arg(long, global = true, env = "OCTOAUTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plugin to use.
    #[arg(long, global = true, default_value = octoauth_infrastructure::plugins::PLUGIN_ID)]
    pub plugin: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered plugins.
    Plugins,
    /// Print an authorization URL and its state.
    Authorize {
        /// OAuth client key id.
        #[arg(long)]
        key: String,
        /// Requested scope; repeat for several.
        #[arg(long = "scope")]
        scopes: Vec<String>,
    },
    /// Exchange an authorization code for a token.
    Exchange {
        /// OAuth client key id.
        #[arg(long)]
        key: String,
        /// Code returned to the redirect URI.
        #[arg(long)]
        code: String,
    },
    /// Obtain a new token from a refresh token.
    Refresh {
        /// OAuth client key id.
        #[arg(long)]
        key: String,
        /// Refresh token from an earlier exchange.
        #[arg(long)]
        refresh_token: String,
    },
    /// Show the authenticated user as template data.
    Whoami {
        /// OAuth client key id.
        #[arg(long)]
        key: String,
        /// Access token.
        #[arg(long, env = "OCTOAUTH_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// List stored keys.
    Keys,
    /// Store an OAuth client key.
    AddKey {
        /// Key id.
        #[arg(long)]
        id: String,
        /// Human readable label.
        #[arg(long)]
        label: Option<String>,
        /// OAuth client id.
        #[arg(long)]
        client_id: String,
        /// OAuth client secret.
        #[arg(long, env = "OCTOAUTH_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_authorize_scopes() {
        let cli = Cli::try_parse_from([
            "octoauth", "authorize", "--key", "gh", "--scope", "repo", "--scope", "gist",
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(cli.plugin, "octoauth_github");
        let Command::Authorize { key, scopes } = cli.command else {
            panic!("expected authorize");
        };
        assert_eq!(key, "gh");
        assert_eq!(scopes, vec!["repo".to_string(), "gist".to_string()]);
    }
}

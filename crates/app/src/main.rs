//! Octoauth - host binary for the GitHub OAuth provider adapter.

mod cli;
mod commands;
mod settings;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use commands::Host;
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing::debug!(keys_file = %settings.keys_file.display(), "loaded settings");

    Host::new(settings)?.run(&cli.plugin, cli.command).await
}

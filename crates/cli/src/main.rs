mod commands;

use anyhow::Context;
use campaign_core::config::{DEFAULT_CONFIG_FILE, load_config};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "campaign")]
#[command(version, about = "Campaign website: static site generator and donation API", long_about = None)]
struct Cli {
    /// Generate the static site and exit instead of starting the server
    #[arg(long)]
    generate: bool,

    /// Path to the site configuration (defaults apply if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "campaign=info,campaign_store=info,campaign_generator=info,tower_http=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if cli.generate {
        commands::generate::run(&config).await
    } else {
        commands::serve::run(config).await
    }
}

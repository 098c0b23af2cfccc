//! Notes Client - interactive shell
//!
//! Connects to a notes REST backend and reads commands from stdin.

use anyhow::Result;
use clap::Parser;
use notes_client::{shell::Shell, AppState, Config};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Manage notes on a REST backend")]
struct Cli {
    /// Backend base URL (the collection lives at <server>/notes)
    #[arg(long, env = "NOTES_API_URL")]
    server: Option<String>,

    /// Path to the YAML config file
    #[arg(short, long, default_value = "notes.yaml")]
    config: PathBuf,

    /// How long feedback messages stay visible, in milliseconds
    #[arg(long)]
    feedback_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the rendered page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notes_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_yaml_and_env(Some(&cli.config))?;
    if let Some(server) = cli.server {
        config.api_url = server;
    }
    if let Some(ms) = cli.feedback_ms {
        config.feedback_ttl = Duration::from_millis(ms);
    }

    tracing::info!("Using notes backend at {}", config.api_url);
    let state = AppState::new(config).await?;

    let shell = Shell::new(state.coordinator.clone());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell.run(stdin, tokio::io::stdout()).await
}

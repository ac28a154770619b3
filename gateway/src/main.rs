use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use findus_gateway::{ServerConfig, start_server};

/// Findus gateway - Alexa skill webhook for the Findus question-answering API
#[derive(Parser, Debug)]
#[command(name = "findus-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing (RUST_LOG, default INFO)
    findus_gateway::logging::init_tracing();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    let cli = Cli::parse();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        ServerConfig::from_file(&config_path).map_err(|e| anyhow!(e.to_string()))?
    } else {
        ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?
    };

    info!("Starting server on {}", config.address());
    start_server(config).await?;

    Ok(())
}
